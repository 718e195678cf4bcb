pub fn mail_endpoint() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

// Delivery identifiers are baked in at build time. A build without them still
// compiles; the contact form then reports failure instead of calling out.
pub fn mail_service_id() -> &'static str {
    option_env!("STUDIOZ_MAIL_SERVICE_ID").unwrap_or("")
}

pub fn mail_template_id() -> &'static str {
    option_env!("STUDIOZ_MAIL_TEMPLATE_ID").unwrap_or("")
}

pub fn mail_account_id() -> &'static str {
    option_env!("STUDIOZ_MAIL_ACCOUNT_ID").unwrap_or("")
}
