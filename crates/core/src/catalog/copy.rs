//! Static narrative copy.
//!
//! Templates may use the placeholders listed in [`TrackBundle::PLACEHOLDERS`];
//! `Catalog` fills them for the active track.
//!
//! [`TrackBundle::PLACEHOLDERS`]: crate::model::TrackBundle::PLACEHOLDERS

use crate::model::{
    AutonomyLevel, DisplayBlock, JusticeOutcome, OutreachStatus, Section, Tier, Tone,
};

/// Per-section page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub title: &'static str,
    pub narrator: &'static str,
    pub instruction: Option<&'static str>,
}

pub(crate) fn section_copy(section: Section) -> SectionCopy {
    match section {
        Section::Intro => SectionCopy {
            title: "Ethically Sourced Biomedical Data",
            narrator: "Welcome to this educational journey... Today, we embark on an exploration of \
                practices that honor {subject}' autonomy, ensure societal justice, and promote the \
                beneficence of improving human health.",
            instruction: None,
        },
        Section::Autonomy => SectionCopy {
            title: "Pillar 1: Autonomy & Informed Consent",
            narrator: "Informed consent... transcends a simple signature. It is a dynamic, ongoing \
                dialogue... Simplifying complex medical jargon into clear, understandable language \
                is crucial.",
            instruction: Some(
                "Pick a communication style below to observe how the phrasing of a consent form \
                 impacts a participant's understanding and autonomy.",
            ),
        },
        Section::Justice => SectionCopy {
            title: "Pillar 2: Justice & Health Equity",
            narrator: "Health equity involves actively addressing and reducing disparities... This \
                means diversifying the recruitment for studies to include historically \
                underrepresented and marginalized populations, such as {underserved}.",
            instruction: Some(
                "Adjust your recruitment strategy and observe how the diversity of {dataset} changes.",
            ),
        },
        Section::Privacy => SectionCopy {
            title: "Pillar 3: Privacy & Security",
            narrator: "Protecting privacy is... a moral imperative. Employ multi-layered security \
                protocols, including state-of-the-art encryption... and stringent access controls.",
            instruction: Some(
                "Check the boxes to add security layers to your data protocol. Try to achieve \
                 'Secure' status.",
            ),
        },
        Section::Beneficence => SectionCopy {
            title: "Pillar 4: Beneficence & Availability",
            narrator: "To maximize beneficence... researchers must cultivate an ethical framework \
                that integrates continuous feedback. Both {subject} and communities should feel as \
                though they are partners in the research process.",
            instruction: Some(
                "Click the button below to 'Close the Loop' and see how data availability \
                 benefits the community.",
            ),
        },
        Section::Summary => SectionCopy {
            title: "Demo Summary",
            narrator: "Ethically acquiring biomedical data is a nuanced process... By maintaining a \
                steadfast commitment to these principles, healthcare organizations can achieve a \
                delicate balance where scientific innovation does not compromise individual rights.",
            instruction: None,
        },
    }
}

pub(crate) fn static_blocks(section: Section) -> Vec<DisplayBlock> {
    match section {
        Section::Intro => vec![
            DisplayBlock::new(
                Tone::Neutral,
                "These four pillars apply equally to **Clinical Science** (Patients) and \
                 **Foundational Science** (Donors/Samples). This tour follows {subject} whose \
                 {sample} feed the **{dataset}**.",
            )
            .with_heading("The Foundation of Ethical Science"),
            DisplayBlock::new(
                Tone::Neutral,
                "**Respecting the Source.** Ensuring individuals maintain control over their \
                 personal health information and biological samples.",
            )
            .with_heading("1. Autonomy"),
            DisplayBlock::new(
                Tone::Neutral,
                "**Equitable Representation.** Actively addressing health disparities by \
                 including historically underrepresented populations.",
            )
            .with_heading("2. Justice"),
            DisplayBlock::new(
                Tone::Neutral,
                "**Data Security.** Employing multi-layered security protocols to protect \
                 sensitive genetic and medical data.",
            )
            .with_heading("3. Privacy"),
            DisplayBlock::new(
                Tone::Neutral,
                "**Positive Impact.** Ensuring research outcomes align with community needs and \
                 provide actionable health insights.",
            )
            .with_heading("4. Beneficence"),
        ],
        Section::Autonomy => vec![
            DisplayBlock::new(
                Tone::Info,
                "The undersigned grantor hereby authorizes the utilization of biological materials \
                 and associated phenotypic metadata for indefinite longitudinal analysis, waiving \
                 rights to pecuniary gain...",
            )
            .with_heading("Low Autonomy (Legal Jargon)"),
            DisplayBlock::new(
                Tone::Error,
                "Result: the participant is confused. They sign out of fear or pressure, not \
                 understanding their rights.",
            ),
        ],
        Section::Justice | Section::Privacy => Vec::new(),
        Section::Beneficence => vec![
            DisplayBlock::new(
                Tone::Info,
                "Participating {subject} donate {sample} with trust.",
            )
            .with_heading("1. Acquisition"),
            DisplayBlock::new(
                Tone::Info,
                "Scientists analyze {dataset} to find patterns.",
            )
            .with_heading("2. Research"),
        ],
        Section::Summary => vec![
            DisplayBlock::new(
                Tone::Neutral,
                "Whether you are pipetting in a lab or treating patients in a ward, these rules \
                 apply:\n\n\
                 * **Autonomy:** Did the person truly understand what they agreed to?\n\
                 * **Justice:** Who is missing from my dataset?\n\
                 * **Privacy:** Is this data treated with the same security I would want for my \
                 own family?\n\
                 * **Beneficence:** How does this research give back to the people who made it \
                 possible?",
            )
            .with_heading("Checklist for Ethical Acquisition"),
            DisplayBlock::new(
                Tone::Success,
                "Thank you for exploring this demo. Together, we can turn the challenges of today \
                 into opportunities for a healthier and more just tomorrow.",
            ),
        ],
    }
}

pub(crate) fn autonomy_prompt() -> DisplayBlock {
    DisplayBlock::new(
        Tone::Warning,
        "*Select a communication style above to see the translation.*",
    )
}

pub(crate) fn autonomy_block(level: AutonomyLevel) -> DisplayBlock {
    match level {
        AutonomyLevel::Jargon => DisplayBlock::new(
            Tone::Warning,
            "**Translation:** none offered. The form is handed over as written and the \
             {subject} are left to decode it alone.",
        )
        .with_heading("User View (Legalese)"),
        AutonomyLevel::Standard => DisplayBlock::new(
            Tone::Success,
            "**Translation:** 'You are giving us permission to study your {sample} to understand \
             diseases. You will not be paid, but your contribution helps science.'",
        )
        .with_heading("User View (Simplified)"),
        AutonomyLevel::Empowered => DisplayBlock::new(
            Tone::Success,
            "**Translation:** 'We want to partner with you. We will use your {sample} to study X. \
             Here are the risks and benefits. You can ask questions now, and you can withdraw at \
             any time. What do you think?'\n\n\
             *The {subject} should feel empowered... understanding they have the right to withdraw.*",
        )
        .with_heading("User View (Empowered)"),
    }
}

pub(crate) fn justice_block(outcome: &JusticeOutcome) -> DisplayBlock {
    let figures = format!(
        "Underrepresented share: **{}** (goal {}).",
        outcome.current, outcome.goal
    );
    if outcome.pass {
        DisplayBlock::new(
            Tone::Success,
            format!(
                "{figures} Your recruitment reaches {{underserved}}. Conclusions drawn from \
                 {{dataset}} will be robust and equitable."
            ),
        )
        .with_heading("Goal met")
    } else {
        DisplayBlock::new(
            Tone::Info,
            format!(
                "{figures} {{dataset}} still under-samples {{underserved}}. Findings may not \
                 generalize to the people who need them most."
            ),
        )
        .with_heading("Goal not met")
    }
}

pub(crate) fn outreach_block(status: OutreachStatus) -> DisplayBlock {
    match status {
        OutreachStatus::Homogeneous => DisplayBlock::new(
            Tone::Info,
            "**Status:** Your dataset is currently homogenous. Scientific findings may not be \
             applicable to the general population.",
        ),
        OutreachStatus::Representative => DisplayBlock::new(
            Tone::Success,
            "**Status:** Your dataset reflects the real world. Your scientific conclusions will be \
             robust and equitable.",
        ),
    }
}

pub(crate) fn tier_block(tier: Tier) -> DisplayBlock {
    let block = match tier {
        Tier::Secure => DisplayBlock::new(
            Tone::Success,
            "You have implemented a multi-layered defense. You are compliant with regulations \
             like HIPAA.",
        ),
        Tier::Vulnerable => DisplayBlock::new(
            Tone::Warning,
            "You have some protection, but sophisticated threats could still expose sensitive \
             genomic or medical data.",
        ),
        Tier::AtRisk => DisplayBlock::new(
            Tone::Error,
            "Data is largely unprotected. A breach here would damage the trust of {subject} and \
             violate ethical standards.",
        ),
    };
    block.with_heading(tier.label())
}

pub(crate) fn beneficence_block(loop_closed: bool) -> DisplayBlock {
    if loop_closed {
        DisplayBlock::new(
            Tone::Success,
            "**Impact:**\n\n\
             * **For participating {subject}:** Access to improved treatments & personal health insights.\n\
             * **For Communities:** Public health reports & shared intellectual property.\n\
             * **For Science:** Trust is built, ensuring participation in future studies.",
        )
        .with_heading("3. Return of Value (Beneficence Achieved)")
    } else {
        DisplayBlock::new(
            Tone::Neutral,
            "*Data is extracted, but nothing is returned. The {subject} feel used rather than \
             included.*",
        )
        .with_heading("3. The Void (Current State)")
    }
}
