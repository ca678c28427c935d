//! Page modules - one component per client route

pub mod edit_post;
pub mod home;
pub mod new_post;
pub mod posts;
pub mod signin;
pub mod signup;

pub use edit_post::EditPostPage;
pub use home::HomePage;
pub use new_post::NewPostPage;
pub use posts::PostsPage;
pub use signin::SignInPage;
pub use signup::SignUpPage;
