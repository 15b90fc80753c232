use super::{Audit, PageHeader, PageMeta, l};
use crate::types::Localized;

/// Display text and `tel:` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    pub display: &'static str,
    pub href: &'static str,
}

pub const PHONES: [Phone; 2] = [
    Phone { display: "094 - 468 98 27", href: "tel:+218944689827" },
    Phone { display: "091 - 882 41 94", href: "tel:+218918824194" },
];

pub const WEBSITE_DISPLAY: &str = "www.effectwaveco.com";

pub const META: PageMeta = PageMeta {
    title: Some(l("تواصل معنا", "Contact")),
    description: Some(l(
        "تواصل مع وكالة موجة تأثير للتسويق والإنتاج الإعلامي",
        "Contact Effect Wave Agency for marketing and media production services",
    )),
};

pub const HEADER: PageHeader = PageHeader {
    eyebrow: "CONTACT US",
    title: l("تواصل معنا", "Contact Us"),
    description: l(
        "إذا كنت تبحث عن جهة تفهم السوق قبل مخاطبته، وتحوّل الإعلام والتسويق إلى قيمة حقيقية، فأنت في المكان الصحيح.",
        "If you are looking for a partner who understands the market before addressing it, and turns media and marketing into real value, you are in the right place.",
    ),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCopy {
    pub heading: Localized,
    pub phone: Localized,
    pub email: Localized,
    pub website: Localized,
    pub form_heading: Localized,
    pub name_label: Localized,
    pub name_placeholder: Localized,
    pub email_label: Localized,
    pub email_placeholder: &'static str,
    pub message_label: Localized,
    pub message_placeholder: Localized,
    pub submit: Localized,
}

pub const COPY: ContactCopy = ContactCopy {
    heading: l("معلومات التواصل", "Contact Information"),
    phone: l("الهاتف", "Phone"),
    email: l("البريـد الإلكتروني", "Email"),
    website: l("الموقع الإلكتروني", "Website"),
    form_heading: l("أرسل رسالة", "Send a Message"),
    name_label: l("الاسم الكامل", "Full Name"),
    name_placeholder: l("اكتب اسمك هنا", "Enter your name"),
    email_label: l("البريد الإلكتروني", "Email Address"),
    email_placeholder: "name@example.com",
    message_label: l("الرسالة", "Message"),
    message_placeholder: l("كيف يمكننا مساعدتك؟", "How can we help you?"),
    submit: l("إرسال الرسالة", "Send Message"),
};

pub(super) fn audit(audit: &mut Audit) {
    audit.meta("contact.meta", &META);
    audit.header("contact.header", &HEADER);
    for (field, value) in [
        ("heading", &COPY.heading),
        ("phone", &COPY.phone),
        ("email", &COPY.email),
        ("website", &COPY.website),
        ("form_heading", &COPY.form_heading),
        ("name_label", &COPY.name_label),
        ("name_placeholder", &COPY.name_placeholder),
        ("email_label", &COPY.email_label),
        ("message_label", &COPY.message_label),
        ("message_placeholder", &COPY.message_placeholder),
        ("submit", &COPY.submit),
    ] {
        audit.text(&format!("contact.{field}"), value);
    }
    for phone in &PHONES {
        audit.plain("contact.phones", phone.display);
    }
}
