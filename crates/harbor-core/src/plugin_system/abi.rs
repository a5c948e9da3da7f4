//! The dynamic-library ABI contract.
//!
//! Every loadable module must export exactly two symbols:
//!
//! - `create`: zero-argument factory returning a new plugin instance, or
//!   null on failure;
//! - `destroy`: one-argument destroyer releasing an instance previously
//!   returned by `create`.
//!
//! The exported signatures use `*mut Box<dyn Plugin>`: the trait object is
//! boxed twice so the pointer crossing the boundary stays thin, and the
//! instance's memory is always released by the module that allocated it.
//! The trait-object layout is part of the contract, so host and plugins must
//! be built with the same Rust toolchain. Either symbol missing is a clean
//! load failure; the candidate is rejected without aborting the batch.
//!
//! [`declare_plugin!`](crate::declare_plugin) emits both exports for a
//! plugin crate.

use crate::plugin_system::traits::Plugin;

/// Symbol name of the factory export.
pub const CREATE_SYMBOL: &[u8] = b"create";

/// Symbol name of the destroyer export.
pub const DESTROY_SYMBOL: &[u8] = b"destroy";

/// Signature of the factory export.
pub type PluginCtor = unsafe extern "C" fn() -> *mut Box<dyn Plugin>;

/// Signature of the destroyer export.
pub type PluginDtor = unsafe extern "C" fn(instance: *mut Box<dyn Plugin>);

/// Emits the `create`/`destroy` exports for a plugin crate.
///
/// The argument is an expression producing the plugin value:
///
/// ```ignore
/// harbor_core::declare_plugin!(GreeterPlugin::new());
/// ```
#[macro_export]
macro_rules! declare_plugin {
    ($ctor:expr) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn create() -> *mut Box<dyn $crate::plugin_system::traits::Plugin> {
            let plugin: Box<dyn $crate::plugin_system::traits::Plugin> = Box::new($ctor);
            Box::into_raw(Box::new(plugin))
        }

        /// # Safety
        /// `instance` must be a pointer previously returned by [`create`]
        /// from this same module, not yet destroyed.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn destroy(
            instance: *mut Box<dyn $crate::plugin_system::traits::Plugin>,
        ) {
            if !instance.is_null() {
                unsafe {
                    drop(Box::from_raw(instance));
                }
            }
        }
    };
}
