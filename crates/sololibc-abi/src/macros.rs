//! Helper macros for ABI function generation.
//!
//! Provides the `abi_fn!` macro that generates `#[unsafe(no_mangle)] pub unsafe extern "C" fn`
//! wrappers. The `mangled-exports` feature keeps Rust mangling instead, so a
//! host process that links this crate as an rlib (its own test binaries) keeps
//! calling the libc it was built against.

/// Generate an ABI-compatible extern "C" function.
///
/// # Usage
///
/// ```ignore
/// abi_fn! {
///     /// Doc comment for the function.
///     fn my_func(arg1: Type1, arg2: Type2) -> ReturnType {
///         // implementation body
///     }
/// }
/// ```
#[allow(unused_macros)]
macro_rules! abi_fn {
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> $ret:ty
        $body:block
    ) => {
        $(#[$meta])*
        #[cfg_attr(not(feature = "mangled-exports"), unsafe(no_mangle))]
        #[allow(unused_unsafe)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) -> $ret {
            unsafe { $body }
        }
    };

    // Variant without return type (returns ())
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? )
        $body:block
    ) => {
        $(#[$meta])*
        #[cfg_attr(not(feature = "mangled-exports"), unsafe(no_mangle))]
        #[allow(unused_unsafe)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) {
            unsafe { $body }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use abi_fn;
