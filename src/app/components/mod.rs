//! Shared UI components for the dashboard pages.

pub mod camera_form;
pub mod dropdown;
pub mod error_alert;
pub mod file_upload_button;
pub mod form_inputs;
pub mod layout;
pub mod modal;
pub mod nav;
pub mod password_gate;
pub mod status;
pub mod tooltip_button;

pub use camera_form::CameraForm;
pub use dropdown::Dropdown;
pub use error_alert::ErrorAlert;
pub use file_upload_button::FileUploadButton;
pub use form_inputs::{TextInput, ThresholdInput, ToggleInput};
pub use layout::Layout;
pub use modal::Modal;
pub use nav::Nav;
pub use password_gate::{PasswordGate, SettingsShell};
pub use status::{ErrorState, Loading};
pub use tooltip_button::TooltipButton;
