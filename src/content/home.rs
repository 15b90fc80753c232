//! Home page: hero, headline, about cards, services grid, why-us, team
//! teaser and the clients strip.

use super::{Audit, ByTheme, Card, PageMeta, Service, l};
use crate::types::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub badge: Localized,
    pub title_line1: Localized,
    pub title_line2: Localized,
    pub description: Localized,
    pub button: Localized,
    /// Line under the brand name.
    pub tagline: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub title_line1: Localized,
    pub title_line2: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeContent {
    pub hero: Hero,
    pub headline: Headline,
    pub about: [Card; 3],
    pub services_title: Localized,
    pub services_eyebrow: &'static str,
    pub services: [Service; 4],
    pub why_us: [Card; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientsStrip {
    pub eyebrow: Localized,
    pub title: Localized,
    pub description: Localized,
    pub stats: [Stat; 3],
    pub footnote: Localized,
    pub logo_count: usize,
}

impl ClientsStrip {
    /// `/logos/clients/01.png` and onwards.
    pub fn logo_paths(&self) -> Vec<String> {
        (1..=self.logo_count)
            .map(|n| format!("/logos/clients/{n:02}.png"))
            .collect()
    }
}

pub const META: PageMeta = PageMeta {
    title: None,
    description: Some(l(
        "موجة تأثير وكالة رائدة في التسويق والإعلام، تقدم حلولاً مبتكرة تساعد العلامات التجارية والمؤسسات على التواصل بفعالية.",
        "Effect Wave is a leading marketing and media agency, providing innovative solutions that help brands connect effectively.",
    )),
};

pub const SCROLL_HINT: Localized = l("مرر للأسفل", "Scroll");
/// Prefix of the why-us heading; the brand name follows it.
pub const WHY_PREFIX: Localized = l("لماذا", "Why");

pub static HOME: ByTheme<HomeContent> = ByTheme {
    agency: HomeContent {
        hero: Hero {
            badge: l("استثمار رائد | A Groundbreaking Investment", "A Groundbreaking Investment"),
            title_line1: l("نصنع التأثير...", "We Create Impact..."),
            title_line2: l(
                "ونفهم السوق قبل أن نخاطبه",
                "And understand the market before we speak to it",
            ),
            description: l(
                "موجة تأثير وكالة رائدة في التسويق والإعلام، تقدم حلولاً مبتكرة تساعد العلامات التجارية والمؤسسات على التواصل بفعالية.",
                "Effect Wave is a leading marketing and media agency, providing innovative solutions that help brands connect effectively.",
            ),
            button: l("ابدأ رحلتك معنا", "Start Your Journey"),
            tagline: l("وكالة تسويق", "MARKETING AGENCY"),
        },
        headline: Headline {
            title_line1: l("نصنع التأثير...", "We Create Impact..."),
            title_line2: l("ونبني حضوراً مستداماً", "And Build Lasting Presence"),
            description: l(
                "نساعد العلامات التجارية على النمو من خلال التسويق الاستراتيجي والإنتاج الإعلامي المتقدم.",
                "We help brands grow through strategic marketing and advanced media production.",
            ),
        },
        about: [
            Card {
                icon: "users",
                title: l("من نحن", "Who We Are"),
                text: l(
                    "موجة تأثير وكالة رائدة في التسويق والإعلام، تقدّم حلولاً مبتكرة تساعد العلامات التجارية والمؤسسات على التواصل بفعالية.",
                    "Effect Wave is a leading agency in marketing and media, offering innovative solutions to help brands and institutions communicate effectively.",
                ),
            },
            Card {
                icon: "target",
                title: l("رؤيتنا", "Our Vision"),
                text: l(
                    "أن نكون جهة رائدة في صناعة التأثير الإعلامي والتسويقي المبني على الفهم والمعرفة.",
                    "To be a leading force in creating media and marketing impact built on understanding and knowledge.",
                ),
            },
            Card {
                icon: "sparkles",
                title: l("فلسفتنا", "Our Philosophy"),
                text: l(
                    "التأثير يبدأ من الفهم. نسعى لتقديم حلول مبنية على البيانات والتحليل لتحقيق نتائج ملموسة وقيمة مستدامة.",
                    "Impact starts with understanding. We provide data-driven solutions to achieve tangible results and sustainable value.",
                ),
            },
        ],
        services_title: l("خدماتنا", "Our Services"),
        services_eyebrow: "SOLUTIONS",
        services: [
            Service {
                icon: "target",
                title: l("إعداد الاستراتيجيات", "Strategy Formulation"),
                subtitle: "STRATEGIC PLANNING",
                features: &[
                    l("دراسة السوق", "Market Study"),
                    l("تحليل الجمهور", "Audience Analysis"),
                    l("بناء الخطط وتحديد الرسائل", "Strategic Planning & Messaging"),
                ],
            },
            Service {
                icon: "monitor",
                title: l("التسويق الرقمي", "Digital Marketing"),
                subtitle: "DIGITAL MARKETING",
                features: &[
                    l("إدارة حسابات التواصل", "Social Media Management"),
                    l("صناعة المحتوى", "Content Creation"),
                    l("إدارة الحملات الرقمية", "Digital Ads Campaigns"),
                ],
            },
            Service {
                icon: "megaphone",
                title: l("المؤتمرات والفعاليات", "Events & PR"),
                subtitle: "EVENTS & PR",
                features: &[
                    l("تخطيط وتنفيذ المؤتمرات", "Conference Planning"),
                    l("إدارة المعارض والفعاليات", "Exhibition Management"),
                    l("التغطية الإعلامية", "Media Coverage"),
                ],
            },
            Service {
                icon: "pen-tool",
                title: l("المطبوعات والتصميم", "Design & Print"),
                subtitle: "DESIGN & PRINT",
                features: &[
                    l("بناء الهويات البصرية", "Visual Identity Design"),
                    l("تصميم المواد التسويقية", "Marketing Collateral"),
                    l("اللوحات الإعلانية", "Outdoor Billboards"),
                ],
            },
        ],
        why_us: [
            Card {
                icon: "eye",
                title: l("التأثير يبدأ من الفهم", "Impact Starts with Understanding"),
                text: l(
                    "لا نخاطب السوق قبل أن نفهمه بدقة.",
                    "We don't address the market before deeply understanding it.",
                ),
            },
            Card {
                icon: "star",
                title: l("استثمار رائد", "A Groundbreaking Investment"),
                text: l(
                    "استثمار حقيقي يعود بقيمة مستدامة.",
                    "A real investment that returns sustainable value.",
                ),
            },
            Card {
                icon: "check",
                title: l("قيمة حقيقية", "Real Value"),
                text: l(
                    "نقدم شراكة طويلة الأمد.",
                    "We offer long-term partnerships, not just temporary services.",
                ),
            },
        ],
    },
    production: HomeContent {
        hero: Hero {
            badge: l("استثمار رائد | A Groundbreaking Investment", "A Groundbreaking Investment"),
            title_line1: l("إبداع بصري", "Visual Creativity"),
            title_line2: l(
                "وإنتاج إعلامي يترك أثراً حقيقياً",
                "Media Production that Leaves a Real Impact",
            ),
            description: l(
                "نحول الأفكار إلى واقع بصري ملموس من خلال أحدث تقنيات الإنتاج الإعلامي والفني.",
                "We transform ideas into tangible visual reality through the latest media and artistic production technologies.",
            ),
            button: l("احجز استشارتك", "Book Your Consultation"),
            tagline: l("إنتاج إعلامي", "MEDIA PRODUCTION"),
        },
        headline: Headline {
            title_line1: l("نصنع التأثير...", "We Create Impact..."),
            title_line2: l("ونقود المشهد الإعلامي", "And Lead the Media Scene"),
            description: l(
                "نحول الأفكار إلى واقع ملموس من خلال أحدث تقنيات الإنتاج الإعلامي والفني.",
                "We transform ideas into tangible reality through the latest media and artistic production technologies.",
            ),
        },
        about: [
            Card {
                icon: "users",
                title: l("من نحن", "Who We Are"),
                text: l(
                    "موجة تأثير للإنتاج الفني والإعلامي هي الوجهة للحلول البصرية المبتكرة التي تخلق تأثيراً حقيقياً ومستداماً.",
                    "Effect Wave for Artistic and Media Production is the destination for innovative visual solutions that create a real and sustainable impact.",
                ),
            },
            Card {
                icon: "film",
                title: l("رؤيتنا", "Our Vision"),
                text: l(
                    "أن نكون المعيار للجودة الفنية والإبداعية في السوق.",
                    "To be the standard for artistic and creative quality in the market.",
                ),
            },
            Card {
                icon: "sparkles",
                title: l("فلسفتنا", "Our Philosophy"),
                text: l(
                    "الإعلام الفعّال هو نتيجة قراءة دقيقة للبيئة الثقافية، مع لمسة إبداعية تضمن جودة الصورة وقوة الصوت.",
                    "Effective media is the result of a careful reading of the cultural environment, with a creative touch that ensures image quality and sound power.",
                ),
            },
        ],
        services_title: l("خدمات الإنتاج الفني", "Production Services"),
        services_eyebrow: "CREATIVE PRODUCTION",
        services: [
            Service {
                icon: "clapperboard",
                title: l("الإنتاج الإعلامي", "Media Production"),
                subtitle: "MEDIA PRODUCTION",
                features: &[
                    l("الإعلانات التجارية", "Commercial Ads"),
                    l("البرامج التلفزيونية", "TV & Digital Programs"),
                    l("الأفلام الوثائقية", "Documentaries"),
                ],
            },
            Service {
                icon: "film",
                title: l("الإنتاج الفني", "Artistic Production"),
                subtitle: "ARTISTIC PRODUCTION",
                features: &[
                    l("موشن جرافيك 2D", "2D Motion Graphics"),
                    l("فيديوهات 3D", "3D Product Videos"),
                    l("المعالجة البصرية (VFX)", "Visual Processing (VFX)"),
                ],
            },
            Service {
                icon: "mic",
                title: l("الصوت والبودكاست", "Audio & Podcast"),
                subtitle: "AUDIO & PODCAST",
                features: &[
                    l("إنتاج بودكاست", "Podcast Production"),
                    l("التعليق الصوتي", "Voice Over"),
                    l("المكساج الصوتي", "Audio Mixing"),
                ],
            },
            Service {
                icon: "image",
                title: l("الإخراج الفني", "Art Direction"),
                subtitle: "ART DIRECTION",
                features: &[
                    l("الإخراج الفني", "Art Direction"),
                    l("تجهيز المحتوى", "Audio Content Prep"),
                    l("تسجيل الأعمال", "Audio Recording"),
                ],
            },
        ],
        why_us: [
            Card {
                icon: "bar-chart",
                title: l("إبداع وتحليل", "Creativity & Analysis"),
                text: l(
                    "نربط الإبداع الفني بالنتائج ملموسة.",
                    "We link artistic creativity with tangible results.",
                ),
            },
            Card {
                icon: "tv",
                title: l("جودة بصرية", "Visual Quality"),
                text: l(
                    "جودة تخاطب الجمهور وتلفت الأنظار.",
                    "Quality that speaks to the audience and catches the eye.",
                ),
            },
            Card {
                icon: "zap",
                title: l("استثمار رائد", "A Groundbreaking Investment"),
                text: l(
                    "استثمار في صورة علامتك التجارية.",
                    "An investment in your brand image.",
                ),
            },
        ],
    },
};

pub const CLIENTS: ClientsStrip = ClientsStrip {
    eyebrow: l("شركاؤنا", "Trusted By"),
    title: l("شركات ومؤسسات تعاملنا معها", "Our Clients"),
    description: l(
        "نفخر بتقديم خدماتنا لعدد من الشركات والمؤسسات في مختلف المجالات.",
        "We take pride in our clients' trust and successful partnerships",
    ),
    stats: [
        Stat { value: "50+", label: l("مشروع مكتمل", "Projects Delivered") },
        Stat { value: "30+", label: l("عميل راضٍ", "Happy Clients") },
        Stat { value: "5+", label: l("سنوات خبرة", "Years Experience") },
    ],
    footnote: l("شركاء النجاح في رحلتنا", "Partners in our journey to success"),
    logo_count: 13,
};

pub(super) fn audit(audit: &mut Audit) {
    audit.meta("home.meta", &META);
    audit.text("home.scroll_hint", &SCROLL_HINT);
    audit.text("home.why_prefix", &WHY_PREFIX);
    for (theme, content) in [("agency", &HOME.agency), ("production", &HOME.production)] {
        let path = format!("home.{theme}");
        let hero = &content.hero;
        for (field, value) in [
            ("badge", &hero.badge),
            ("title_line1", &hero.title_line1),
            ("title_line2", &hero.title_line2),
            ("description", &hero.description),
            ("button", &hero.button),
            ("tagline", &hero.tagline),
        ] {
            audit.text(&format!("{path}.hero.{field}"), value);
        }
        audit.text(&format!("{path}.headline.title_line1"), &content.headline.title_line1);
        audit.text(&format!("{path}.headline.title_line2"), &content.headline.title_line2);
        audit.text(&format!("{path}.headline.description"), &content.headline.description);
        for (i, card) in content.about.iter().enumerate() {
            audit.card(&format!("{path}.about[{i}]"), card);
        }
        audit.text(&format!("{path}.services_title"), &content.services_title);
        audit.plain(&format!("{path}.services_eyebrow"), content.services_eyebrow);
        for (i, service) in content.services.iter().enumerate() {
            audit.service(&format!("{path}.services[{i}]"), service);
        }
        for (i, card) in content.why_us.iter().enumerate() {
            audit.card(&format!("{path}.why_us[{i}]"), card);
        }
    }
    audit.text("home.clients.eyebrow", &CLIENTS.eyebrow);
    audit.text("home.clients.title", &CLIENTS.title);
    audit.text("home.clients.description", &CLIENTS.description);
    audit.text("home.clients.footnote", &CLIENTS.footnote);
    for (i, stat) in CLIENTS.stats.iter().enumerate() {
        audit.plain(&format!("home.clients.stats[{i}].value"), stat.value);
        audit.text(&format!("home.clients.stats[{i}].label"), &stat.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Locale, Theme};

    #[test]
    fn hero_follows_theme_and_locale() {
        assert_eq!(HOME.get(Theme::Agency).hero.button.get(Locale::Ar), "ابدأ رحلتك معنا");
        assert_eq!(
            HOME.get(Theme::Production).hero.tagline.get(Locale::En),
            "MEDIA PRODUCTION"
        );
    }

    #[test]
    fn thirteen_client_logos() {
        let paths = CLIENTS.logo_paths();
        assert_eq!(paths.len(), 13);
        assert_eq!(paths[0], "/logos/clients/01.png");
        assert_eq!(paths[12], "/logos/clients/13.png");
    }
}
