mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod place_detail;
pub use place_detail::PlaceDetail;
