//! Shared plumbing for the little corpus tools in this workspace.
//!
//! ```rust,ignore
//! use term_macros::*;
//!
//! fn main() {
//!     tool! {
//!         args:
//!             - min_chars: usize = 0;
//!             - max_chars: usize = 1000;
//!                 ? max_chars == 0
//!                 => "max_chars can't be zero"
//!             - lowercase;
//!         ;
//!
//!         body: || {
//!             println!("{} {} {}", min_chars, max_chars, lowercase);
//!         }
//!     }
//! }
//! ```

pub mod args;
pub mod lines;
pub mod logger;

pub use lines::for_each_line;

use std::fmt::Display;

/// Turns whatever a `tool!` body hands back into a process exit code.
pub trait Exit {
    fn code(self) -> i32;
}

impl Exit for () {
    fn code(self) -> i32 {
        0
    }
}

impl<T, E: Display> Exit for Result<T, E> {
    fn code(self) -> i32 {
        match self {
            Ok(_) => 0,
            Err(e) => {
                log::error!("{}", e);
                1
            }
        }
    }
}

/// Prints one JSON line to stdout.
pub fn emit_json<T: miniserde::Serialize>(value: &T) {
    println!("{}", miniserde::json::to_string(value));
}

#[macro_export]
macro_rules! tool {
    (@value $args:ident, $name:ident : $ty:ty = $default:expr) => {
        $args.optional::<$ty>(stringify!($name)).unwrap_or_else(|| $default)
    };
    (@value $args:ident, $name:ident : $ty:ty) => {
        $args.required::<$ty>(stringify!($name))
    };
    (@value $args:ident, $name:ident) => {
        $args.switch(stringify!($name))
    };

    (@switch $name:ident : $($rest:tt)*) => { false };
    (@switch $name:ident) => { true };

    (
        args:
            $(
                - $name:ident $(: $ty:ty $(= $default:expr)?)? ;
                $(? $check:expr => $msg:literal)?
            )*
        ;

        body: || $body:block
    ) => {{
        let __args = $crate::args::Args::from_env(&[
            $(
                $crate::args::Flag {
                    name: stringify!($name),
                    switch: $crate::tool!(@switch $name $(: $ty)?),
                    usage: concat!(
                        "--", stringify!($name)
                        $(, " <", stringify!($ty), ">" $(, " (default: ", stringify!($default), ")")?)?
                    ),
                },
            )*
        ]);
        $crate::logger::init(if __args.verbose() {
            $crate::logger::LevelFilter::Debug
        } else {
            $crate::logger::LevelFilter::Info
        });

        $(
            #[allow(unused_variables)]
            let $name = $crate::tool!(@value __args, $name $(: $ty $(= $default)?)?);
            $(
                if $check {
                    $crate::args::fail($msg);
                }
            )?
        )*

        let __code = $crate::Exit::code((|| $body)());
        if __code != 0 {
            std::process::exit(__code);
        }
    }};
}
