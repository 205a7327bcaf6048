pub mod state;

pub use state::{
    is_mobile_width, NavItem, Page, SessionUser, ShellAction, ShellState, MOBILE_BREAKPOINT_PX,
};
