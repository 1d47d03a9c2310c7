//! The operational manual content
//!
//! Defined once as a static table and shared read-only by every consumer.
//! Rendering code never mutates or reorders it.

use crate::types::{Section, SectionContent, SubItem};

/// Device name shown on the gate screen and as the manual header
pub const DEVICE_TITLE: &str = "DRM Technic Pet Crem Data Logger Panel Interface";

/// Subtitle shown on the gate screen
pub const MANUAL_SUBTITLE: &str = "Operational Manual";

/// Label of the reveal button on the gate screen
pub const REVEAL_LABEL: &str = "Click here to view";

/// Heading of the footer shown beneath every section
pub const NOTE_TITLE: &str = "Important Note";

/// Body of the footer shown beneath every section
pub const NOTE_TEXT: &str =
    "For any issues or concerns, please contact DRM Technic support immediately.";

/// Section selected when the manual is first revealed
pub const DEFAULT_SECTION_ID: &str = "overview";

const SAFETY_ITEMS: &[SubItem] = &[
    SubItem::Text {
        title: "General Warning",
        text: "This logger system contains complex parts and electronic components specifically designed for this instrument. Service should only be carried out by factory-trained service personnel.",
    },
    SubItem::Text {
        title: "Electrical Safety",
        text: "To avoid electrical shock, do not operate this equipment if it bears any sign of damage to any portion of its exterior surface. Do not expose this equipment to any source of excessive heat or moisture.",
    },
    SubItem::Text {
        title: "Power Connections",
        text: "Use only a power cord with a protective earthing terminal. Never use an extension cord that is not equipped with this feature. Connect the power cord to a power outlet of the correct voltage and that has a protective earth contact.",
    },
];

const SPEC_ITEMS: &[SubItem] = &[
    SubItem::Spec {
        title: Some("Display Technology"),
        spec: "Display",
        value: "7\" TFT with 16.7M colours",
    },
    SubItem::Spec {
        title: Some("User Interface"),
        spec: "Touchscreen",
        value: "Capacitive touch screen",
    },
    SubItem::Spec {
        title: Some("Screen Resolution"),
        spec: "Resolution",
        value: "1024 x 600 pixels",
    },
    SubItem::Spec {
        title: Some("Central Processing Unit"),
        spec: "Processor",
        value: "Freescale i.MX 6SoloX (ARM Cortex A9 & M4)",
    },
    SubItem::Spec {
        title: Some("Input Capabilities"),
        spec: "Analog Inputs",
        value: "Four 16-bit bipolar analog inputs (maximum ±40V d.c.)",
    },
    SubItem::Spec {
        title: Some("Digital Connectivity"),
        spec: "Digital I/O Pins",
        value: "Eight digital input/output pins",
    },
];

const INSTALLATION_STEPS: &[SubItem] = &[
    SubItem::Step {
        step: 1,
        text: "Mounting the Display: Secure the PanelPilotACE SGD 70-A in the desired location ensuring it is accessible and visible for easy monitoring.",
    },
    SubItem::Step {
        step: 2,
        text: "Connecting Power: Use only the supplied power adapter. Connect the power cord to a suitable power outlet.",
    },
    SubItem::Step {
        step: 3,
        text: "Connecting Sensors: Connect the 4-20mA sensors to the appropriate input channels. Ensure correct polarity to avoid damage.",
    },
];

const EXPORT_STEPS: &[SubItem] = &[
    SubItem::Step {
        step: 1,
        text: "Connect a laptop to the panel via USB.",
    },
    SubItem::Step {
        step: 2,
        text: "Use the DRM Technic utility tool on the laptop.",
    },
    SubItem::Step {
        step: 3,
        text: "Select \"Retrieve Logged Files\" in the utility tool.",
    },
    SubItem::Step {
        step: 4,
        text: "The data logs, recorded every 15 seconds, will be transferred as CSV formatted text files.",
    },
    SubItem::Step {
        step: 5,
        text: "After retrieving the files, the user can delete the logs on the system to maintain optimal performance.",
    },
];

static SECTIONS: [Section; 7] = [
    Section {
        id: "overview",
        title: "Overview",
        content: SectionContent::Text(
            "The DRM Technic Pet Crem Data Logger Panel Interface is an advanced data logger designed for precise monitoring of emissions in pet crematoriums, focusing on Carbon Monoxide (CO), Oxygen (O2), and Dust levels. It features a 7-inch capacitive touchscreen and integrates with tailored software for efficient data collection and reporting.",
        ),
    },
    Section {
        id: "safety",
        title: "Safety Instructions",
        content: SectionContent::Items(SAFETY_ITEMS),
    },
    Section {
        id: "specs",
        title: "Hardware Specifications",
        content: SectionContent::Items(SPEC_ITEMS),
    },
    Section {
        id: "installation",
        title: "Installation",
        content: SectionContent::Items(INSTALLATION_STEPS),
    },
    Section {
        id: "operation",
        title: "General Operation",
        content: SectionContent::Text(
            "The Pet Crem Data Logger features a 7-inch capacitive touchscreen that displays real-time data for up to three channels simultaneously. The interface provides both numerical and graphical representations of the data being logged.",
        ),
    },
    Section {
        id: "export",
        title: "Data Export",
        content: SectionContent::Items(EXPORT_STEPS),
    },
    Section {
        id: "troubleshooting",
        title: "Troubleshooting",
        content: SectionContent::Text(
            "For any issues, please contact DRM Technic support:\nPhone: +44 (0) 1782 638 491\nEmail: sales@drmtechnic.com\n\nProvide:\n- Your company name and contact details\n- Description of the problem and any other useful information",
        ),
    },
];

/// All manual sections in tab order
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

/// Look up a section by id
pub fn find_section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// Position of a section in tab order
pub fn section_index(id: &str) -> Option<usize> {
    SECTIONS.iter().position(|section| section.id == id)
}
