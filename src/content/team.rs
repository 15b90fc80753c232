use super::{Audit, PageHeader, PageMeta, l};
use crate::types::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Instagram,
    Linkedin,
    Phone,
}

impl SocialKind {
    pub fn icon(self) -> &'static str {
        match self {
            SocialKind::Instagram => "instagram",
            SocialKind::Linkedin => "linkedin",
            SocialKind::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub kind: SocialKind,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub name: Localized,
    pub role: Localized,
    pub image: &'static str,
    pub socials: &'static [Social],
}

/// Team block on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teaser {
    pub eyebrow: Localized,
    pub title: Localized,
    pub description: Localized,
    pub badge: &'static str,
}

pub const META: PageMeta = PageMeta {
    title: Some(l("فريق العمل", "Our Team")),
    description: Some(l(
        "فريق يصنع التأثير بعقلية استثمارية. مختصون يعملون معًا لبناء مشاريع ذات قيمة وتأثير مستدام.",
        "A team that creates impact with an investment mindset. Specialists working together to build projects of value and sustainable impact.",
    )),
};

pub const HEADER: PageHeader = PageHeader {
    eyebrow: "OUR TEAM",
    title: l("فريق العمل", "Our Team"),
    description: l(
        "فريق يصنع التأثير بعقلية استثمارية. مختصون يعملون معًا لبناء مشاريع ذات قيمة وتأثير مستدام.",
        "A team that creates impact with an investment mindset. Specialists working together to build projects of value and sustainable impact.",
    ),
};

pub const LEADERSHIP: Localized = l("الفريق القيادي", "Leadership Team");

pub const STATEMENT: Localized = l(
    "يعمل فريقنا القيادي جنبًا إلى جنب مع شبكة من الكفاءات الإبداعية والتنفيذية حسب طبيعة كل مشروع، لضمان جودة العمل وتحقيق أفضل النتائج.",
    "Our leadership team works side-by-side with a network of creative and executive talents tailored to each project, ensuring work quality and achieving the best results.",
);

pub const TEASER: Teaser = Teaser {
    eyebrow: l("فريقنا", "OUR TEAM"),
    title: l("العقول خلف الإبداع", "Minds Behind Creativity"),
    description: l(
        "مجموعة من الشغوفين المبدعين الذين يجمعهم هدف واحد: تحويل أفكارك إلى واقع استثنائي.",
        "A group of passionate creators united by one goal: transforming your ideas into extraordinary reality.",
    ),
    badge: "JOIN THE WAVE",
};

pub const MEMBERS: [Member; 4] = [
    Member {
        name: l("سامي التاجوري", "Sami Al-Tajouri"),
        role: l("المؤسس والمدير التنفيذي", "Founder & CEO"),
        image: "/assets/Media/team/سامي التاجوري - مدير عام.jpg",
        socials: &[
            Social { kind: SocialKind::Instagram, url: "https://www.instagram.com/sami_altajouri" },
            Social { kind: SocialKind::Linkedin, url: "https://www.linkedin.com/in/sami-altajuory" },
            Social { kind: SocialKind::Phone, url: "tel:+218944689827" },
        ],
    },
    Member {
        name: l("محمد بن ناصر", "Mohamed Ben Nasser"),
        role: l("المدير العام", "Managing Director"),
        image: "/assets/Media/team/محمد رمضان بن ناصر المدير التنفيذي للشركة.jpg",
        socials: &[
            Social { kind: SocialKind::Instagram, url: "https://www.instagram.com/mohamed.bennaser.official" },
            Social { kind: SocialKind::Phone, url: "tel:+21892-8701432" },
        ],
    },
    Member {
        name: l("أحمد عمار", "Ahmed Ammar"),
        role: l("مدير العلاقات العامة", "Public Relations Manager"),
        image: "/assets/Media/team/أحمد عمار-مدير العلاقات العامة.jpg",
        socials: &[
            Social { kind: SocialKind::Instagram, url: "https://www.instagram.com/ahmedbnamarr" },
            Social { kind: SocialKind::Linkedin, url: "https://www.linkedin.com/in/ahmedamarr" },
            Social { kind: SocialKind::Phone, url: "tel:+905338693063" },
        ],
    },
    Member {
        name: l("دانيا الفرجاني", "Dania Fergiani"),
        role: l("المدير الإبداعي", "Creative Director"),
        image: "/assets/Media/team/المدير الابداعي-دانيا الفرجاني.jpeg",
        socials: &[
            Social { kind: SocialKind::Instagram, url: "https://www.instagram.com/dfergiani" },
            Social { kind: SocialKind::Phone, url: "tel:+905050762000" },
        ],
    },
];

pub(super) fn audit(audit: &mut Audit) {
    audit.meta("team.meta", &META);
    audit.header("team.header", &HEADER);
    audit.text("team.leadership", &LEADERSHIP);
    audit.text("team.statement", &STATEMENT);
    audit.text("team.teaser.eyebrow", &TEASER.eyebrow);
    audit.text("team.teaser.title", &TEASER.title);
    audit.text("team.teaser.description", &TEASER.description);
    for (i, member) in MEMBERS.iter().enumerate() {
        audit.text(&format!("team.members[{i}].name"), &member.name);
        audit.text(&format!("team.members[{i}].role"), &member.role);
        audit.plain(&format!("team.members[{i}].image"), member.image);
        for social in member.socials {
            audit.plain(&format!("team.members[{i}].socials"), social.url);
        }
    }
}
