use leptos::*;

pub struct Category {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: [Category; 7] = [
    Category {
        label: "Classes",
        description: "Yoga, Meditation, Fitness + more",
        icon: "fi-rr-massage",
    },
    Category {
        label: "Therapy Services",
        description: "Psychologists, Counsellors, Coaches + more",
        icon: "fi-rr-heart",
    },
    Category {
        label: "Personal Care",
        description: "Hair, Nails, Massage + more",
        icon: "fi-rr-sparkles",
    },
    Category {
        label: "Mindful Food & Drink",
        description: "Health, Vegan, Gluten-Free + more",
        icon: "fi-rr-leaf",
    },
    Category {
        label: "Wellness Tourism",
        description: "Spa, Retreats, Wellness Holidays + more",
        icon: "fi-rr-mountain",
    },
    Category {
        label: "Alternative Medicine",
        description: "Acupuncture, Chiropractic, Naturopathy + more",
        icon: "fi-rr-stethoscope",
    },
    Category {
        label: "Digital Wellness",
        description: "Apps, Wearables, Fitness + more",
        icon: "fi-rr-smartphone",
    },
];

#[component]
pub fn CategoryGrid() -> impl IntoView {
    view! {
        <div class="industries-section">
            <h3>"Mindful Categories"</h3>
            <div class="industries-grid">
                {CATEGORIES
                    .iter()
                    .map(|category| view! {
                        <div class="industry-item">
                            <i class=format!("industry-icon fi {}", category.icon)></i>
                            <span>
                                {format!("{} ({})", category.label, category.description)}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
