use super::{Audit, ByTheme, CallToAction, PageHeader, PageMeta, Service, l};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicesContent {
    pub header: PageHeader,
    pub services: &'static [Service],
}

pub const META: PageMeta = PageMeta {
    title: Some(l("خدماتنا", "Services")),
    description: Some(l(
        "استكشف خدمات التسويق والإنتاج الإعلامي التي تقدمها وكالة موجة تأثير",
        "Explore marketing and media production services offered by Effect Wave Agency",
    )),
};

pub const CTA: CallToAction = CallToAction {
    title: l("هل تحتاج خدماتنا؟", "Need our services?"),
    text: l(
        "تواصل معنا اليوم لنناقش كيف يمكننا مساعدتك في تحقيق أهدافك.",
        "Get in touch today and let's discuss how we can help you achieve your goals.",
    ),
    button: l("تواصل معنا", "Contact Us"),
};

pub static SERVICES: ByTheme<ServicesContent> = ByTheme {
    agency: ServicesContent {
        header: PageHeader {
            eyebrow: "AGENCY SERVICES",
            title: l("خدماتنا", "Our Services"),
            description: l(
                "نقدم حلولاً تسويقية واستراتيجية مبنية على فهم دقيق للسوق والجمهور.",
                "We provide marketing and strategic solutions based on a deep understanding of the market and audience.",
            ),
        },
        services: &[
            Service {
                icon: "target",
                title: l("إعداد الاستراتيجيات التسويقية", "Marketing Strategy Formulation"),
                subtitle: "STRATEGIC PLANNING",
                features: &[
                    l("دراسة السوق", "Market Research"),
                    l("تحليل الجمهور", "Audience Analysis"),
                    l("بناء الخطط", "Strategic Planning"),
                    l("تحديد الرسائل", "Messaging Design"),
                ],
            },
            Service {
                icon: "monitor",
                title: l("التسويق الرقمي وإدارة المنصات", "Digital Marketing & Management"),
                subtitle: "DIGITAL MARKETING",
                features: &[
                    l("إدارة حسابات التواصل", "Social Media Management"),
                    l("صناعة المحتوى", "Content Creation"),
                    l("الحملات الرقمية", "Digital Campaigns"),
                    l("تحليل الأداء", "Performance Analysis"),
                ],
            },
            Service {
                icon: "tv",
                title: l("الحملات الإعلانية", "Advertising Campaigns"),
                subtitle: "ADVERTISING CAMPAIGNS",
                features: &[
                    l("التخطيط", "Campaign Planning"),
                    l("التنفيذ", "Execution"),
                    l("الإشراف والمتابعة", "Supervision & Tracking"),
                    l("قياس النتائج", "Results Measurement"),
                ],
            },
            Service {
                icon: "pen-tool",
                title: l("التصميم والهوية البصرية", "Branding & Visual Identity"),
                subtitle: "BRANDING & IDENTITY",
                features: &[
                    l("تصميم الشعارات", "Logo Design"),
                    l("التصميم الإعلاني", "Advertising Design"),
                    l("المواد التسويقية", "Marketing Collateral"),
                ],
            },
            Service {
                icon: "megaphone",
                title: l("تنظيم المؤتمرات والمعارض", "Events & Exhibitions"),
                subtitle: "EVENTS & EXHIBITIONS",
                features: &[
                    l("تخطيط المؤتمرات", "Conference Planning"),
                    l("إدارة الفعاليات", "Exhibition Management"),
                    l("تغطية إعلامية", "Media Coverage"),
                ],
            },
        ],
    },
    production: ServicesContent {
        header: PageHeader {
            eyebrow: "PRODUCTION SERVICES",
            title: l("خدماتنا", "Our Services"),
            description: l(
                "نحول الأفكار إلى واقع مرئي ومسموع بأعلى معايير الجودة الفنية.",
                "We transform ideas into visual and audio reality with the highest standards of artistic quality.",
            ),
        },
        services: &[
            Service {
                icon: "clapperboard",
                title: l("الإنتاج الإعلامي", "Media Production"),
                subtitle: "MEDIA PRODUCTION",
                features: &[
                    l("الإعلانات التجارية", "Commercial Ads"),
                    l("برامج تلفزيونية", "TV & Digital Programs"),
                    l("أفلام وثائقية", "Documentaries"),
                    l("تغطيات إعلامية", "Media Coverage"),
                ],
            },
            Service {
                icon: "film",
                title: l("الإنتاج الفني", "Artistic & Post-Production"),
                subtitle: "ART & POST-PRODUCTION",
                features: &[
                    l("موشن جرافيك 2D", "2D Motion Graphics"),
                    l("فيديوهات 3D", "3D Project Videos"),
                    l("المعالجة البصرية", "Visual Effects (VFX)"),
                    l("الإخراج الفني", "Art Direction"),
                ],
            },
            Service {
                icon: "mic",
                title: l("الإنتاج الصوتي والبودكاست", "Audio & Podcast Production"),
                subtitle: "AUDIO SERVICES",
                features: &[
                    l("إنتاج بودكاست", "Full Podcast Production"),
                    l("التعليق الصوتي", "Voice Over"),
                    l("تسجيل الأعمال", "Audio Recording"),
                    l("المكساج الصوتي", "Mixing & Mastering"),
                ],
            },
            Service {
                icon: "image",
                title: l("المطبوعات والتصميمات", "Print & Design Services"),
                subtitle: "PRINT & DESIGN",
                features: &[
                    l("تصميم المطبوعات", "Print Design"),
                    l("الكتيبات والنشرات", "Brochures & Flyers"),
                    l("الهويات البصرية", "Visual Identity"),
                    l("اللوحات الإعلانية", "Billboards"),
                ],
            },
        ],
    },
};

pub(super) fn audit(audit: &mut Audit) {
    audit.meta("services.meta", &META);
    audit.text("services.cta.title", &CTA.title);
    audit.text("services.cta.text", &CTA.text);
    audit.text("services.cta.button", &CTA.button);
    for (theme, content) in [("agency", &SERVICES.agency), ("production", &SERVICES.production)] {
        audit.header(&format!("services.{theme}.header"), &content.header);
        for (i, service) in content.services.iter().enumerate() {
            audit.service(&format!("services.{theme}.services[{i}]"), service);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    #[test]
    fn agency_offers_five_production_four() {
        assert_eq!(SERVICES.get(Theme::Agency).services.len(), 5);
        assert_eq!(SERVICES.get(Theme::Production).services.len(), 4);
        assert_eq!(SERVICES.get(Theme::Production).header.eyebrow, "PRODUCTION SERVICES");
    }
}
