mod login;
mod logout;
mod session_status;

pub use login::{login_handler, LoginRequestDto, LoginResponseDto};
pub use logout::logout_handler;
pub use session_status::{session_status_handler, SessionStatusDto};
pub use login::__path_login_handler;
pub use logout::__path_logout_handler;
pub use session_status::__path_session_status_handler;
