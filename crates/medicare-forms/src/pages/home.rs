//! Static home content

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SupportContact {
    pub emergency_phone: &'static str,
    pub email: &'static str,
}

pub const FEATURES: [FeatureCard; 5] = [
    FeatureCard {
        title: "Patient Registration",
        description: "Register new patients with complete medical details",
        path: "/patient-registration",
    },
    FeatureCard {
        title: "Doctor Registration",
        description: "Register doctors with specialization and availability",
        path: "/doctor-registration",
    },
    FeatureCard {
        title: "Book Appointment",
        description: "Schedule appointments with available doctors",
        path: "/book-appointment",
    },
    FeatureCard {
        title: "Manage Appointments",
        description: "Update or cancel existing appointments",
        path: "/manage-appointments",
    },
    FeatureCard {
        title: "Feedback",
        description: "Share your experience and rate our services",
        path: "/feedback",
    },
];

pub const SUPPORT: SupportContact = SupportContact {
    emergency_phone: "+94 11 123 4567",
    email: "support@medicare.lk",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;

    #[test]
    fn test_every_feature_links_to_a_form() {
        for card in FEATURES {
            assert!(Route::resolve(card.path).form_kind().is_some(), "{}", card.path);
        }
    }
}
