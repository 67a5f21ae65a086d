use dioxus::prelude::*;
use folio_domain::{Badge, BadgeTone, PROFILE, Profile};

const PAGE_CLASSES: &str =
    "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center";
const CONTAINER_CLASSES: &str = "max-w-4xl mx-auto px-6 text-center";
const CARD_CLASSES: &str = "bg-white rounded-2xl shadow-2xl p-12 transform hover:scale-105 \
                            transition-transform duration-300";
const NAME_CLASSES: &str = "text-6xl font-bold text-gray-800 mb-6";
const TITLE_CLASSES: &str = "text-2xl font-semibold text-blue-600 mb-4";
const INTRO_CLASSES: &str = "text-xl text-gray-600 mb-8";
const BADGE_ROW_CLASSES: &str = "flex flex-wrap justify-center gap-3 mb-8";
const BADGE_PILL_CLASSES: &str = "px-4 py-2 rounded-full text-sm font-medium";
const FEATURES_PANEL_CLASSES: &str = "bg-gray-50 rounded-lg p-6 text-left";
const FEATURES_HEADING_CLASSES: &str = "text-lg font-semibold text-gray-800 mb-3";
const FEATURES_LIST_CLASSES: &str = "space-y-2 text-gray-600";

/// The portfolio card: name, title, intro, technology badges and the feature checklist.
///
/// Has no props, hooks or side effects; every render produces the same tree.
#[component]
pub fn StaticProfileView() -> Element {
    let Profile { name, title, intro, badges, features_heading, features } = PROFILE;

    rsx! {
        div { class: PAGE_CLASSES,
            div { class: CONTAINER_CLASSES,
                div { class: CARD_CLASSES,
                    h1 { class: NAME_CLASSES, "{name}" }
                    h2 { class: TITLE_CLASSES, "{title}" }
                    p { class: INTRO_CLASSES, "{intro}" }
                    div { class: BADGE_ROW_CLASSES,
                        for Badge { label, tone } in badges {
                            div { key: "{label}", class: badge_classes(*tone), "{label}" }
                        }
                    }
                    div { class: FEATURES_PANEL_CLASSES,
                        h3 { class: FEATURES_HEADING_CLASSES, "{features_heading}" }
                        ul { class: FEATURES_LIST_CLASSES,
                            for line in features {
                                li { key: "{line}", "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn badge_classes(tone: BadgeTone) -> String {
    format!("{} {BADGE_PILL_CLASSES}", tone.classes())
}
