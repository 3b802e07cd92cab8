//! The application's default intent catalog.

use super::types::{Intent, IntentCatalog, IntentEffect};

fn intent(
    id: &str,
    effect: IntentEffect,
    keywords: &[&str],
    examples: &[&str],
    description: &str,
) -> Intent {
    Intent {
        id: id.to_string(),
        effect,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        examples: examples.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}

fn route(path: &str) -> IntentEffect {
    IntentEffect::Route(path.to_string())
}

fn action(name: &str) -> IntentEffect {
    IntentEffect::Action(name.to_string())
}

impl IntentCatalog {
    /// Default catalog shipped with the application.
    ///
    /// Keywords are lowercase, unique across intents, and already in their
    /// corrected form so a verbatim keyword survives normalization unchanged.
    pub fn builtin() -> Self {
        let intents = vec![
            intent(
                "home",
                route("/"),
                &["home", "dashboard", "main screen"],
                &["back to the main screen", "open the dashboard"],
                "Return to the home dashboard",
            ),
            intent(
                "report_issue",
                route("/report"),
                &["report issue", "pothole", "garbage", "streetlight", "drainage"],
                &[
                    "report a pothole on my street",
                    "there is garbage on the road",
                    "the streetlight is not working",
                ],
                "Report a civic issue such as potholes, garbage, broken streetlights or blocked drains",
            ),
            intent(
                "my_reports",
                route("/my-reports"),
                &["my reports", "my complaints", "complaint status"],
                &["show my reports", "what happened to my complaint"],
                "Track the status of issues you have reported",
            ),
            intent(
                "heatmap",
                route("/heatmap"),
                &["heat map", "issue map", "hotspots"],
                &["show me the heat map", "where are the problem areas"],
                "See reported issues and hotspots on a map",
            ),
            intent(
                "scam_check",
                route("/scam-check"),
                &["scam", "fraud", "check message", "suspicious link"],
                &["is this message a scam", "check this link for fraud"],
                "Check a message, call or link for scams and fraud",
            ),
            intent(
                "schemes",
                route("/schemes"),
                &["government schemes", "welfare", "subsidy"],
                &["which schemes am i eligible for", "find government schemes"],
                "Discover government schemes and benefits you qualify for",
            ),
            intent(
                "bill_payment",
                route("/bills"),
                &["pay bill", "bill payment", "electricity bill", "water bill"],
                &["pay my electricity bill", "i need to pay the water bill"],
                "Pay electricity, water and other utility bills",
            ),
            intent(
                "documents",
                route("/documents"),
                &["documents", "upload document", "certificates"],
                &["upload my aadhaar card", "show my documents"],
                "Store and upload identity documents and certificates",
            ),
            intent(
                "safety",
                route("/safety"),
                &["safety", "safe route", "women safety"],
                &["i feel unsafe", "show safe routes near me"],
                "Personal safety tools, safe routes and emergency contacts",
            ),
            intent(
                "sos",
                action("trigger_sos"),
                &["sos", "emergency", "call police"],
                &["send an sos", "this is an emergency"],
                "Send an emergency alert with your location to trusted contacts",
            ),
            intent(
                "change_language",
                action("change_language"),
                &["change language", "switch language", "hindi", "kannada"],
                &["switch to hindi", "change the language to kannada"],
                "Change the app language",
            ),
            intent(
                "capabilities",
                IntentEffect::Inform,
                &["voice commands", "what are the commands"],
                &["what can i say", "list voice commands"],
                "Explain which voice commands are available",
            ),
        ];

        // The entries above are static and covered by tests.
        Self::new(intents).unwrap_or_else(|e| panic!("builtin intent catalog is invalid: {e}"))
    }
}
