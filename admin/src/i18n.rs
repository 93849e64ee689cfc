//! Static translation tables
//!
//! Each screen carries its own table of English/Swahili strings, selected
//! at render time from the configured [`Language`].

use shared::Language;

/// A single bilingual string
#[derive(Debug, Clone, Copy)]
pub struct LocalizedText {
    pub en: &'static str,
    pub sw: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, sw: &'static str) -> Self {
        Self { en, sw }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Swahili => self.sw,
        }
    }
}

/// Strings shared across screens
pub struct CommonStrings {
    pub generic_error: LocalizedText,
    pub saved: LocalizedText,
    pub deleted: LocalizedText,
}

pub const COMMON: CommonStrings = CommonStrings {
    generic_error: LocalizedText::new(
        "Something went wrong. Please try again.",
        "Hitilafu imetokea. Tafadhali jaribu tena.",
    ),
    saved: LocalizedText::new("Saved successfully", "Imehifadhiwa"),
    deleted: LocalizedText::new("Deleted successfully", "Imefutwa"),
};

/// Store transfer screen strings
pub struct TransferStrings {
    pub title: LocalizedText,
    pub transfer_complete: LocalizedText,
    pub select_source: LocalizedText,
    pub select_destination: LocalizedText,
}

pub const TRANSFER: TransferStrings = TransferStrings {
    title: LocalizedText::new("Transfer Stock", "Hamisha Bidhaa"),
    transfer_complete: LocalizedText::new("Transfer completed", "Uhamisho umekamilika"),
    select_source: LocalizedText::new("Select source store", "Chagua duka la kutoka"),
    select_destination: LocalizedText::new(
        "Select destination",
        "Chagua duka la kupokea",
    ),
};

/// Store management screen strings
pub struct StoreStrings {
    pub created: LocalizedText,
    pub updated: LocalizedText,
}

pub const STORES: StoreStrings = StoreStrings {
    created: LocalizedText::new("Store created", "Duka limeundwa"),
    updated: LocalizedText::new("Store updated", "Duka limesasishwa"),
};

/// User management screen strings
pub struct UserStrings {
    pub created: LocalizedText,
    pub invited: LocalizedText,
    pub updated: LocalizedText,
}

pub const USERS: UserStrings = UserStrings {
    created: LocalizedText::new("User created", "Mtumiaji ameundwa"),
    invited: LocalizedText::new("Invitation sent", "Mwaliko umetumwa"),
    updated: LocalizedText::new("User updated", "Mtumiaji amesasishwa"),
};
