//! Privacy policy and terms of service.
//!
//! Section bodies are Markdown; the renderer turns [`LegalDocument::markdown`]
//! into HTML.

use super::{Audit, PageMeta, l};
use crate::types::{Locale, Localized};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: Localized,
    pub body: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalDocument {
    pub eyebrow: &'static str,
    pub title: Localized,
    pub last_updated: Localized,
    pub sections: &'static [Section],
    pub meta: PageMeta,
}

impl LegalDocument {
    /// The whole body as one Markdown document, one `##` per section.
    pub fn markdown(&self, locale: Locale) -> String {
        let mut out = String::new();
        for section in self.sections {
            out.push_str("## ");
            out.push_str(section.heading.get(locale));
            out.push_str("\n\n");
            out.push_str(section.body.get(locale));
            out.push_str("\n\n");
        }
        out
    }
}

const LAST_UPDATED: Localized = l("آخر تحديث: فبراير 2026", "Last Updated: February 2026");

pub const PRIVACY: LegalDocument = LegalDocument {
    eyebrow: "PRIVACY POLICY",
    title: l("سياسة الخصوصية", "Privacy Policy"),
    last_updated: LAST_UPDATED,
    sections: &[
        Section {
            heading: l("المعلومات التي نجمعها", "Information We Collect"),
            body: l(
                "نجمع المعلومات التي تقدمها لنا مباشرة عند التواصل معنا عبر نموذج الاتصال أو البريد الإلكتروني، بما في ذلك اسمك وعنوان بريدك الإلكتروني ومحتوى رسالتك.",
                "We collect information you provide directly when you contact us through the contact form or email, including your name, email address, and message content.",
            ),
        },
        Section {
            heading: l("كيف نستخدم معلوماتك", "How We Use Your Information"),
            body: l(
                "نستخدم المعلومات التي نجمعها للرد على استفساراتك وتقديم خدماتنا وتحسين تجربة المستخدم على موقعنا.",
                "We use the information we collect to respond to your inquiries, provide our services, and improve user experience on our website.",
            ),
        },
        Section {
            heading: l("حماية المعلومات", "Information Protection"),
            body: l(
                "نتخذ إجراءات أمنية معقولة لحماية معلوماتك الشخصية من الوصول غير المصرح به أو التعديل أو الكشف.",
                "We take reasonable security measures to protect your personal information from unauthorized access, modification, or disclosure.",
            ),
        },
        Section {
            heading: l("تواصل معنا", "Contact Us"),
            body: l(
                "إذا كان لديك أي أسئلة حول سياسة الخصوصية هذه، يرجى التواصل معنا عبر <info@effectwaveco.com>.",
                "If you have any questions about this Privacy Policy, please contact us at <info@effectwaveco.com>.",
            ),
        },
    ],
    meta: PageMeta {
        title: Some(l("سياسة الخصوصية", "Privacy Policy")),
        description: Some(l(
            "سياسة الخصوصية لوكالة موجة تأثير",
            "Privacy Policy for Effect Wave Agency",
        )),
    },
};

pub const TERMS: LegalDocument = LegalDocument {
    eyebrow: "TERMS OF SERVICE",
    title: l("شروط الاستخدام", "Terms of Service"),
    last_updated: LAST_UPDATED,
    sections: &[
        Section {
            heading: l("قبول الشروط", "Acceptance of Terms"),
            body: l(
                "باستخدامك لهذا الموقع، فإنك توافق على الالتزام بهذه الشروط والأحكام. إذا كنت لا توافق على أي جزء من هذه الشروط، يرجى عدم استخدام الموقع.",
                "By using this website, you agree to be bound by these terms and conditions. If you do not agree to any part of these terms, please do not use the website.",
            ),
        },
        Section {
            heading: l("الملكية الفكرية", "Intellectual Property"),
            body: l(
                "جميع المحتويات المنشورة على هذا الموقع، بما في ذلك النصوص والصور والتصاميم والشعارات، هي ملك لوكالة موجة تأثير ومحمية بموجب قوانين حقوق النشر.",
                "All content published on this website, including text, images, designs, and logos, is the property of Effect Wave Agency and is protected under copyright laws.",
            ),
        },
        Section {
            heading: l("استخدام الموقع", "Use of Website"),
            body: l(
                "يجب استخدام هذا الموقع لأغراض مشروعة فقط. يُحظر استخدام الموقع بأي طريقة قد تؤدي إلى إلحاق الضرر بالموقع أو تعطيله.",
                "This website must be used for lawful purposes only. You are prohibited from using the website in any way that may cause damage or impairment to the website.",
            ),
        },
        Section {
            heading: l("تواصل معنا", "Contact Us"),
            body: l(
                "لأي استفسارات حول هذه الشروط، يرجى التواصل معنا عبر <info@effectwaveco.com>.",
                "For any inquiries about these terms, please contact us at <info@effectwaveco.com>.",
            ),
        },
    ],
    meta: PageMeta {
        title: Some(l("شروط الاستخدام", "Terms of Service")),
        description: Some(l(
            "شروط وأحكام استخدام موقع موجة تأثير",
            "Terms and conditions for using Effect Wave website",
        )),
    },
};

pub(super) fn audit(audit: &mut Audit) {
    for (name, doc) in [("privacy", &PRIVACY), ("terms", &TERMS)] {
        audit.plain(&format!("{name}.eyebrow"), doc.eyebrow);
        audit.text(&format!("{name}.title"), &doc.title);
        audit.text(&format!("{name}.last_updated"), &doc.last_updated);
        audit.meta(&format!("{name}.meta"), &doc.meta);
        if doc.sections.is_empty() {
            audit.plain(&format!("{name}.sections"), "");
        }
        for (i, section) in doc.sections.iter().enumerate() {
            audit.text(&format!("{name}.sections[{i}].heading"), &section.heading);
            audit.text(&format!("{name}.sections[{i}].body"), &section.body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sections_each() {
        assert_eq!(PRIVACY.sections.len(), 4);
        assert_eq!(TERMS.sections.len(), 4);
    }

    #[test]
    fn markdown_has_one_heading_per_section() {
        let md = TERMS.markdown(Locale::En);
        assert!(md.starts_with("## Acceptance of Terms\n\n"));
        assert_eq!(md.matches("## ").count(), 4);
        assert!(PRIVACY.markdown(Locale::Ar).contains("## حماية المعلومات"));
    }
}
