//! Static landing page copy
//!
//! FAQ categories and items, stat labels, and the form's select options all
//! live here so the components stay purely behavioral. FAQ items carry a
//! page-global index (`item_base` + position) because the accordion allows
//! one open item across the whole section, not one per category.

pub struct FaqCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub items: &'static [FaqItem],
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        id: "general",
        label: "General",
        items: &[
            FaqItem {
                question: "What is CareSlot?",
                answer: "CareSlot is a practice management tool that fills last-minute \
                         cancellations automatically, matching your open appointment slots \
                         with patients already on your waitlist.",
            },
            FaqItem {
                question: "When will CareSlot launch?",
                answer: "We are onboarding practices from the waitlist in stages through \
                         2026, starting with NSW and VIC. Joining the waitlist reserves \
                         your place in the queue.",
            },
            FaqItem {
                question: "Which practice software does CareSlot work with?",
                answer: "At launch we integrate with the major Australian practice \
                         management systems. If yours is not supported yet, tell us when \
                         you join the waitlist and we will prioritise it.",
            },
        ],
    },
    FaqCategory {
        id: "pricing",
        label: "Pricing",
        items: &[
            FaqItem {
                question: "How much does CareSlot cost?",
                answer: "Pricing is per practitioner per month, announced at launch. \
                         Waitlist members receive founding-practice pricing locked in for \
                         two years.",
            },
            FaqItem {
                question: "Is there a setup fee?",
                answer: "No. Setup, data import and training are included for every plan, \
                         and there are no lock-in contracts.",
            },
        ],
    },
    FaqCategory {
        id: "privacy",
        label: "Privacy & Security",
        items: &[
            FaqItem {
                question: "Where is patient data stored?",
                answer: "All data is stored in Australian data centres and handled in \
                         accordance with the Privacy Act and the Australian Privacy \
                         Principles.",
            },
            FaqItem {
                question: "Do you share data with third parties?",
                answer: "No. Patient and practice data is never sold or shared. Waitlist \
                         details are used only to contact you about CareSlot.",
            },
        ],
    },
];

/// Number of FAQ items across all categories.
pub fn faq_item_count() -> usize {
    FAQ_CATEGORIES.iter().map(|c| c.items.len()).sum()
}

/// Page-global index of the first item in the category at `category_idx`.
pub fn faq_item_base(category_idx: usize) -> usize {
    FAQ_CATEGORIES
        .iter()
        .take(category_idx)
        .map(|c| c.items.len())
        .sum()
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "2,500+",
        label: "Providers on the waitlist",
    },
    Stat {
        value: "40%",
        label: "Less time on admin",
    },
    Stat {
        value: "Zero",
        label: "Lock-in contracts",
    },
];

/// (value, label) options for the provider type select.
pub const PROVIDER_TYPES: &[(&str, &str)] = &[
    ("gp", "General Practitioner"),
    ("physio", "Physiotherapist"),
    ("psychologist", "Psychologist"),
    ("dentist", "Dentist"),
    ("allied-health", "Other Allied Health"),
];

/// Australian states and territories for the state select.
pub const STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_indexing_is_contiguous() {
        assert_eq!(faq_item_base(0), 0);
        assert_eq!(faq_item_base(1), FAQ_CATEGORIES[0].items.len());
        assert_eq!(
            faq_item_base(FAQ_CATEGORIES.len()),
            faq_item_count()
        );
    }

    #[test]
    fn test_category_ids_are_unique() {
        let mut ids: Vec<&str> = FAQ_CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FAQ_CATEGORIES.len());
    }
}
