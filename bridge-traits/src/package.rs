//! Host UI framework package registration.
//!
//! The host framework creates a package builder once at start-up and hands it
//! to each library's package provider, which registers the native modules and
//! view managers it exposes.

/// A module the host exposes to script code under [`name`](NativeModule::name).
pub trait NativeModule: Send + Sync {
    fn name(&self) -> &str;
}

/// A native view component.
pub trait ViewManager: Send + Sync {
    fn name(&self) -> &str;
}

/// Registration sink supplied by the host framework.
pub trait PackageBuilder {
    fn add_native_module(&mut self, module: Box<dyn NativeModule>);

    fn add_view_manager(&mut self, view_manager: Box<dyn ViewManager>);
}

/// Implemented by a library to register everything it exposes.
pub trait PackageProvider {
    /// Called by the host at package-creation time.
    fn create_package(&self, builder: &mut dyn PackageBuilder);
}
