//! UI Components

pub mod navbar;
pub mod signin_prompt;

pub use navbar::Navbar;
pub use signin_prompt::SignInPrompt;
