/// Public contact channels of the agency, shared by the estimator call-to-action
/// and the assistant fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub agency_name: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    agency_name: "IMMIGRER AU CANADA",
    whatsapp: "+1 438 794 6736",
    email: "immigreraucanada4@gmail.com",
    phone: "+1 438 794 6736",
    address: "Kinshasa / Gombe - Montréal",
};

impl ContactInfo {
    /// `wa.me` deep link built from the digits of the WhatsApp number.
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self
            .whatsapp
            .chars()
            .filter(|ch| ch.is_ascii_digit())
            .collect();
        format!("https://wa.me/{digits}")
    }

    pub fn phone_uri(&self) -> String {
        let compact: String = self.phone.chars().filter(|ch| !ch.is_whitespace()).collect();
        format!("tel:{compact}")
    }
}
