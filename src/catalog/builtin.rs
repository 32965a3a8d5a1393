use crate::catalog::types::{Feature, FeatureType};

/// Feature log shipped with the form, in display order.
pub fn features() -> Vec<Feature> {
    vec![
        entry(
            "1",
            "Mobile Friendly Design & Onboarding Process",
            "Optimize the entire onboarding experience for mobile devices with responsive design.",
            0,
            FeatureType::Enhancement,
            "UI/UX",
        ),
        entry(
            "3",
            "Google My Business Integration",
            "Allow users to import business details directly from their Google My Business profile.",
            200,
            FeatureType::Feature,
            "Integrations",
        )
        .popular(),
        entry(
            "2",
            "Fix Website Input Field Domain Validation",
            "Ensure website input fields properly accept and validate domain formats.",
            0,
            FeatureType::BugFix,
            "Core Functionality",
        ),
        entry(
            "4",
            "AI Business Description Generator",
            "Generate compelling business descriptions using AI based on minimal user input.",
            50,
            FeatureType::Feature,
            "AI Tools",
        )
        .recommended(),
        entry(
            "5",
            "Business FAQ Copy-Paste Feature",
            "Enable users to easily insert pre-written FAQ content into their business profiles.",
            0,
            FeatureType::Feature,
            "Content Management",
        ),
        entry(
            "16",
            "Call Transfer to Me",
            "Allow business owners to specify immediate call transfers when specific scenarios occur during AI calls.",
            100,
            FeatureType::Feature,
            "Call Management",
        ),
        entry(
            "6",
            "Fix Back Button Data Persistence",
            "Prevent loss of previously entered data when users navigate back.",
            0,
            FeatureType::BugFix,
            "Core Functionality",
        ),
        entry(
            "17",
            "SMS Notifications for Call Events",
            "Configure SMS alerts to notify business owners when specific call events or scenarios occur.",
            200,
            FeatureType::Feature,
            "Notifications",
        ),
        entry(
            "7",
            "Agent Actions Configuration Section",
            "Add interface for users to define what actions their AI agent should perform.",
            0,
            FeatureType::Feature,
            "Agent Configuration",
        ),
        entry(
            "12",
            "Admin Dashboard",
            "Comprehensive admin panel to manage users, businesses, phone numbers, and agents.",
            400,
            FeatureType::Feature,
            "Administration",
        )
        .popular(),
        entry(
            "8",
            "Phone Number Format Enhancement",
            "Display phone numbers in proper format (XXX) XXX-XXXX in review pages.",
            0,
            FeatureType::Enhancement,
            "UI/UX",
        ),
        entry(
            "18",
            "Know Your Customer",
            "AI remembers caller details from previous calls and personalizes greetings and interactions based on call history.",
            500,
            FeatureType::Feature,
            "AI Tools",
        )
        .popular(),
        entry(
            "9",
            "Office Hours Display Fix",
            "Improve how business hours are shown and formatted on business pages.",
            0,
            FeatureType::BugFix,
            "Core Functionality",
        ),
        entry(
            "15",
            "Subscription & Billing System",
            "Complete subscription management with billing and call limit enforcement based on plans.",
            600,
            FeatureType::Feature,
            "Billing",
        )
        .recommended(),
        entry(
            "10",
            "Editable Onboarding Settings",
            "Make all onboarding inputs (voice, business info, agent settings) editable post-setup.",
            0,
            FeatureType::Enhancement,
            "User Management",
        ),
        entry(
            "11",
            "Enhanced Agent Call Flow",
            "Improve agent conversation flow and fix abrupt call terminations during message taking.",
            0,
            FeatureType::Enhancement,
            "Agent Performance",
        ),
        entry(
            "13",
            "Dashboard Design Enhancement",
            "Improve overall dashboard design and user experience with modern UI patterns.",
            0,
            FeatureType::Enhancement,
            "UI/UX",
        ),
        entry(
            "14",
            "Error Messaging System",
            "Implement comprehensive error messages for failed operations and system issues.",
            0,
            FeatureType::Feature,
            "User Experience",
        ),
    ]
}

fn entry(
    id: &str,
    title: &str,
    description: &str,
    price: u64,
    kind: FeatureType,
    category: &str,
) -> Feature {
    Feature {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        kind,
        category: category.to_string(),
        popular: false,
        recommended: false,
    }
}

trait FeatureFlags {
    fn popular(self) -> Self;
    fn recommended(self) -> Self;
}

impl FeatureFlags for Feature {
    fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }
}
