use super::{Audit, ByTheme, PageHeader, PageMeta, l};
use crate::types::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub icon: &'static str,
    pub name: Localized,
    pub description: Localized,
    /// Not launched yet; shown with the "soon" badge.
    pub upcoming: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platforms {
    pub title: Localized,
    pub brand: Localized,
    pub description: Localized,
    pub soon: Localized,
    pub items: [Platform; 2],
}

pub const META: PageMeta = PageMeta {
    title: Some(l("فلسفتنا", "Our Philosophy")),
    description: Some(l(
        "التأثير يبدأ من الفهم... والإعلام الفعّال هو نتيجة قراءة دقيقة للسوق.",
        "Impact starts with understanding... and effective media is the result of a careful reading of the market.",
    )),
};

pub const HEADER: PageHeader = PageHeader {
    eyebrow: "OUR PHILOSOPHY",
    title: l("فلسفتنا", "Our Philosophy"),
    description: l(
        "التأثير يبدأ من الفهم... والإعلام الفعّال هو نتيجة قراءة دقيقة للسوق.",
        "Impact starts with understanding... and effective media is the result of a careful reading of the market.",
    ),
};

pub const HEADING: Localized = l("التأثير يبدأ من", "Impact Starts with");
/// Highlighted last word of the heading.
pub const HEADING_EMPHASIS: Localized = l("الفهم", "Understanding");

pub const PRINCIPLE: Localized = l(
    "الإعلام الفعّال هو نتيجة قراءة دقيقة للسوق، وسلوك الجمهور، والبيئة الثقافية والاقتصادية المحيطة.",
    "Effective media is the result of a precise reading of the market, audience behavior, and the surrounding cultural and economic environment.",
);

pub static APPROACH: ByTheme<Localized> = ByTheme {
    agency: l(
        "نسعى لتقديم حلول مبنية على البيانات والتحليل، مع لمسة إبداعية تضمن تحقيق نتائج ملموسة وقيمة مستدامة.",
        "We seek to provide data-driven solutions and analysis, with a creative touch that ensures tangible results and sustainable value.",
    ),
    production: l(
        "في الإنتاج، نؤمن بأن الجودة التقنية هي أساس الإقناع. ندمج الفن بالتكنولوجيا لخلق تجربة بصرية لا تُنسى.",
        "In production, we believe that technical quality is the basis of persuasion. We merge art with technology to create an unforgettable visual experience.",
    ),
};

/// Two-line badge beside the principles.
pub static MOTTO: ByTheme<[&str; 2]> = ByTheme {
    agency: ["INSIGHT", "DRIVEN"],
    production: ["QUALITY", "FIRST"],
};

/// Shown for the agency theme only.
pub const PLATFORMS: Platforms = Platforms {
    title: l("منصات", "Platforms of"),
    brand: l("موجة تأثير", "Effect Wave"),
    description: l(
        "لتحقيق فهم أعمق للسوق الليبي، أنشأت موجة تأثير منصات متخصصة تعمل كأدوات بحث تسويقي تمكّننا من دراسة السوق مباشرة وتحليل سلوك الجمهور.",
        "To achieve a deeper understanding of the Libyan market, Effect Wave established specialized platforms that serve as marketing research tools, enabling us to study the market directly and analyze audience behavior.",
    ),
    soon: l("قريباً", "Soon"),
    items: [
        Platform {
            icon: "plus",
            name: l("Side Effect", "Side Effect"),
            description: l(
                "منصة متخصصة في المجال الطبي والدوائي، تقدم محتوى توعوي وتحليلي، وتساعد على فهم ديناميكية السوق الصحي وسلوك المستهلك.",
                "A specialized platform in the medical and pharmaceutical field, providing educational and analytical content, helping to understand the dynamics of the health market and consumer behavior.",
            ),
            upcoming: false,
        },
        Platform {
            icon: "trending-up",
            name: l("روّاد", "Rowad"),
            description: l(
                "منصة متخصصة في الاقتصاد وريادة الأعمال، تركز على تحليل السوق والمشاريع وفهم بيئة الأعمال المحلية.",
                "A platform specialized in economics and entrepreneurship, focusing on analyzing the market and projects and understanding the local business environment.",
            ),
            upcoming: true,
        },
    ],
};

pub(super) fn audit(audit: &mut Audit) {
    audit.meta("philosophy.meta", &META);
    audit.header("philosophy.header", &HEADER);
    audit.text("philosophy.heading", &HEADING);
    audit.text("philosophy.heading_emphasis", &HEADING_EMPHASIS);
    audit.text("philosophy.principle", &PRINCIPLE);
    audit.text("philosophy.approach.agency", &APPROACH.agency);
    audit.text("philosophy.approach.production", &APPROACH.production);
    for word in MOTTO.agency.iter().chain(MOTTO.production.iter()) {
        audit.plain("philosophy.motto", word);
    }
    audit.text("philosophy.platforms.title", &PLATFORMS.title);
    audit.text("philosophy.platforms.brand", &PLATFORMS.brand);
    audit.text("philosophy.platforms.description", &PLATFORMS.description);
    audit.text("philosophy.platforms.soon", &PLATFORMS.soon);
    for (i, platform) in PLATFORMS.items.iter().enumerate() {
        audit.text(&format!("philosophy.platforms[{i}].name"), &platform.name);
        audit.text(&format!("philosophy.platforms[{i}].description"), &platform.description);
    }
}
