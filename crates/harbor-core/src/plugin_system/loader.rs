//! Dynamic-library discovery and loading.
//!
//! Wraps the platform loader (`dlopen`/`LoadLibrary` via `libloading`)
//! behind the two-symbol contract from [`abi`](crate::plugin_system::abi).
//! The loader only opens libraries and resolves symbols; lifecycle policy
//! (compatibility gating, ordering, init/shutdown) lives in the manager.

use std::fs;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use log::debug;

use crate::plugin_system::abi::{CREATE_SYMBOL, DESTROY_SYMBOL, PluginCtor, PluginDtor};
use crate::plugin_system::error::{PluginSystemError, Result};
use crate::plugin_system::traits::Plugin;

/// An opened plugin library with both required symbols resolved.
///
/// The function pointers are only valid while `library` stays open; the
/// manager keeps the library alive until after the destroyer has run.
pub(crate) struct RawModule {
    pub(crate) library: Library,
    pub(crate) ctor: PluginCtor,
    pub(crate) dtor: PluginDtor,
}

impl RawModule {
    /// Call the factory symbol. A null result is a load failure.
    ///
    /// The returned pointer must be released through [`RawModule::dtor`]
    /// (never by reconstructing the `Box` on the host side), before the
    /// library is closed.
    pub(crate) fn instantiate(&self, path: &Path) -> Result<*mut Box<dyn Plugin>> {
        let raw = unsafe { (self.ctor)() };
        if raw.is_null() {
            return Err(PluginSystemError::NullInstance {
                path: path.to_path_buf(),
            });
        }
        Ok(raw)
    }
}

/// Open a candidate library and resolve the `create`/`destroy` symbols.
///
/// Any failure (unloadable library, missing symbol) rejects this candidate
/// only; the caller continues with the remaining ones.
pub(crate) fn open_module(path: &Path) -> Result<RawModule> {
    let library = unsafe { Library::new(path) }.map_err(|e| PluginSystemError::LoadingError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // Copy the function pointers out of the symbols so the borrow of
    // `library` ends before it is moved into the module.
    let ctor: PluginCtor = {
        let symbol: Symbol<PluginCtor> =
            unsafe { library.get(CREATE_SYMBOL) }.map_err(|_| PluginSystemError::MissingSymbol {
                path: path.to_path_buf(),
                symbol: String::from_utf8_lossy(CREATE_SYMBOL).into_owned(),
            })?;
        *symbol
    };
    let dtor: PluginDtor = {
        let symbol: Symbol<PluginDtor> =
            unsafe { library.get(DESTROY_SYMBOL) }.map_err(|_| PluginSystemError::MissingSymbol {
                path: path.to_path_buf(),
                symbol: String::from_utf8_lossy(DESTROY_SYMBOL).into_owned(),
            })?;
        *symbol
    };

    debug!("opened plugin library {}", path.display());
    Ok(RawModule { library, ctor, dtor })
}

/// Enumerate candidate plugin libraries in `dir`.
///
/// Non-recursive; only regular files with the platform dynamic-library
/// extension qualify. Candidates are sorted by file name so priority ties
/// later break deterministically.
pub(crate) fn discover_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| PluginSystemError::LoadingError {
        path: dir.to_path_buf(),
        message: format!("failed to read plugin directory: {}", e),
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PluginSystemError::LoadingError {
            path: dir.to_path_buf(),
            message: format!("failed to read directory entry: {}", e),
        })?;
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(std::env::consts::DLL_EXTENSION)
        {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates)
}
