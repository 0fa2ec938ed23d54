// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sig_domain::SigTab;

/// Context sentence sent with free-form questions.
#[must_use]
pub fn tab_context(tab: SigTab) -> String {
    format!(
        "The user is working on the ARCOS System Implementation Guide form. They are currently viewing the '{tab}' tab."
    )
}

/// Help topics offered on a tab. Tabs without curated topics offer the tab
/// itself.
#[must_use]
pub const fn help_topics(tab: SigTab) -> &'static [&'static str] {
    match tab {
        SigTab::LocationHierarchy => &[
            "Location Names",
            "Location Codes",
            "Time Zones",
            "Location Hierarchy",
            "Best Practices",
        ],
        SigTab::CalloutTypeMatrix => &[
            "Callout Types",
            "Matrix Configuration",
            "Best Practices for Callout Types",
        ],
        SigTab::JobClassifications => &[
            "Job Classifications",
            "Journeyman vs Apprentice",
            "Job IDs",
            "Recording Verbiage",
        ],
        SigTab::CalloutReasons => &[
            "Callout Reasons",
            "Managing Callout Reasons",
            "Default Callout Reason",
            "Pre-recorded Verbiage",
        ],
        SigTab::CalloutReasonMatrix => &["Callout Reasons", "Matrix Configuration"],
        SigTab::EventTypes => &["Event Types", "Mobile Release", "Charge and Excuse"],
        SigTab::TroubleLocations => &["Trouble Locations"],
        SigTab::CalloutTypeConfiguration => &["Callout Type Configuration"],
        SigTab::GlobalConfigurationOptions => &["Global Configuration Options"],
        SigTab::DataAndInterfaces => &["Data and Interfaces"],
        SigTab::Additions => &["Additions"],
    }
}

/// Question sent when a help topic is requested on a tab.
#[must_use]
pub fn help_query(tab: SigTab, topic: &str) -> String {
    let subject: &str = match tab {
        SigTab::LocationHierarchy => " the Location Hierarchy in",
        SigTab::CalloutTypeMatrix => " the Matrix of Locations and Callout Types in",
        SigTab::JobClassifications => " Job Classifications in",
        _ => "",
    };
    format!(
        "Explain in detail what I need to know about {topic} when configuring{subject} ARCOS. Include examples and best practices."
    )
}

/// Question sent when help is requested for one field of a described tab.
#[must_use]
pub fn field_help_query(tab: SigTab, field: &str) -> String {
    format!(
        "Explain in detail what information is needed for the '{field}' section in the '{tab}' tab of the ARCOS System Implementation Guide. Include examples, best practices, and common configurations."
    )
}

/// Chat history label for a help request.
#[must_use]
pub fn help_label(topic: &str) -> String {
    format!("Help with {topic}")
}
