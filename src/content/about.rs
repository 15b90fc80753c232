use super::{Audit, ByTheme, PageHeader, PageMeta, l};
use crate::types::Localized;

/// Vision or mission block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub icon: &'static str,
    pub eyebrow: &'static str,
    pub title: Localized,
    pub text: Localized,
    pub motto: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutContent {
    pub header: PageHeader,
    pub intro: Localized,
    pub vision: Pillar,
    pub mission: Pillar,
}

pub const META: PageMeta = PageMeta {
    title: Some(l("من نحن", "About Us")),
    description: Some(l(
        "وكالة رائدة في التسويق والإعلام، نصنع التأثير.",
        "A leading marketing and media agency, we create impact.",
    )),
};

const TITLE: Localized = l("من نحن", "About Us");
const VISION_TITLE: Localized = l("رؤيتنا", "Our Vision");
const MISSION_TITLE: Localized = l("رسالتنا", "Our Mission");

pub static ABOUT: ByTheme<AboutContent> = ByTheme {
    agency: AboutContent {
        header: PageHeader {
            eyebrow: "ABOUT US",
            title: TITLE,
            description: l(
                "وكالة رائدة في التسويق والإعلام، نصنع التأثير.",
                "A leading marketing and media agency, we create impact.",
            ),
        },
        intro: l(
            "في عالم أصبحت فيه الصورة، الرسالة، والتوقيت عوامل حاسمة، تأتي موجة تأثير كوكالة تسويق متكاملة، تقدم فهمًا عميقًا للسوق وبناء تأثير حقيقي ومستدام للعلامات التجارية والمؤسسات.",
            "In a world where image, message, and timing have become decisive factors, Effect Wave comes as an integrated marketing agency, offering a deep understanding of the market and building real and sustainable impact for brands and institutions.",
        ),
        vision: Pillar {
            icon: "eye",
            eyebrow: "OUR VISION",
            title: VISION_TITLE,
            text: l(
                "أن نكون جهة رائدة في صناعة التأثير الإعلامي والتسويقي المبني على الفهم والمعرفة.",
                "To be a leading force in the media and marketing impact industry built on understanding and knowledge.",
            ),
            motto: l("بيانات دقيقة، قرارات ذكية.", "Accurate data, smart decisions."),
        },
        mission: Pillar {
            icon: "target",
            eyebrow: "OUR MISSION",
            title: MISSION_TITLE,
            text: l(
                "تقديم حلول إعلامية وتسويقية مدروسة، مبنية على تحليل السوق وفهم الجمهور، لإنتاج محتوى يليق بالعلامات والمؤسسات التي نمثلها.",
                "To provide thoughtful media and marketing solutions, based on market analysis and audience understanding, to produce content worthy of the brands and institutions we represent.",
            ),
            motto: l("تخطيط استراتيجي، نتائج ملموسة.", "Strategic planning, tangible results."),
        },
    },
    production: AboutContent {
        header: PageHeader {
            eyebrow: "ABOUT US",
            title: TITLE,
            description: l(
                "رواد في الإنتاج الفني والإعلامي، نصنع المشهد.",
                "Pioneers in artistic and media production, we create the scene.",
            ),
        },
        intro: l(
            "نحن نؤمن بأن الإبداع البصري هو اللغة الأقوى. موجة تأثير للإنتاج الفني تقدم حلولاً مبتكرة تحول الأفكار إلى تجارب بصرية وصوتية تترك أثراً لا يمحى في ذاكرة المشاهد.",
            "We believe that visual creativity is the most powerful language. Effect Wave for Artistic Production offers innovative solutions that transform ideas into visual and audio experiences that leave an indelible impact in the viewer's memory.",
        ),
        vision: Pillar {
            icon: "eye",
            eyebrow: "OUR VISION",
            title: VISION_TITLE,
            text: l(
                "أن نكون الخيار الأول في صناعة المحتوى المرئي والمسموع الذي يجمع بين الجودة السينمائية والرسالة الهادفة.",
                "To be the first choice in the visual and audio content industry that combines cinematic quality with a purposeful message.",
            ),
            motto: l("صورة سينمائية، صوت نقي.", "Cinematic image, pure sound."),
        },
        mission: Pillar {
            icon: "target",
            eyebrow: "OUR MISSION",
            title: MISSION_TITLE,
            text: l(
                "توظيف أحدث التقنيات الفنية والكفاءات الإبداعية لإنتاج أعمال فنية ترتقي بالذائقة البصرية وتحقق رؤية شركائنا.",
                "Employing the latest artistic technologies and creative competencies to produce artistic works that elevate visual taste and achieve our partners' vision.",
            ),
            motto: l("إتقان فني، إبداع بلا حدود.", "Artistic perfection, limitless creativity."),
        },
    },
};

pub(super) fn audit(audit: &mut Audit) {
    audit.meta("about.meta", &META);
    for (theme, content) in [("agency", &ABOUT.agency), ("production", &ABOUT.production)] {
        let path = format!("about.{theme}");
        audit.header(&format!("{path}.header"), &content.header);
        audit.text(&format!("{path}.intro"), &content.intro);
        for (name, pillar) in [("vision", &content.vision), ("mission", &content.mission)] {
            audit.plain(&format!("{path}.{name}.eyebrow"), pillar.eyebrow);
            audit.text(&format!("{path}.{name}.title"), &pillar.title);
            audit.text(&format!("{path}.{name}.text"), &pillar.text);
            audit.text(&format!("{path}.{name}.motto"), &pillar.motto);
        }
    }
}
