pub mod button;
pub mod button_group;
pub mod component;
pub mod labelled;
pub mod registry;

pub use button::{Button, ButtonKind, ButtonOptions};
pub use button_group::{ButtonGroup, ButtonGroupOptions};
pub use component::{render, Component, RenderError, RenderResult};
pub use labelled::{Action, LabelAttrs, Labelled, LabelledOptions};
pub use registry::{build_component, render_spec, ComponentSpec, COMPONENT_NAMES};

// Re-exported so hosts only need this crate
pub use polaris_common::{AttrValue, AttributeMap, BaseAttributes, ClassList, RenderOptions, ValidationErrors};
pub use polaris_html::{wrap_children, WrapError, WrapRule};
