//! Small presentational building blocks shared by every view.

use dioxus::prelude::*;

mod button;
pub use button::{Button, ButtonVariant, IconButton};

mod form;
pub use form::{Checkbox, Field, Input, Label, Select, Textarea};

mod feedback;
pub use feedback::{Alert, EmptyState, Spinner};

mod chip;
pub use chip::{Avatar, Chip};

const COMPONENTS_CSS: Asset = asset!("/src/components/components.css");

/// Stylesheet for everything in this module. Rendered once by the app root.
#[component]
pub fn ComponentStyles() -> Element {
    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
    }
}
