//! Package builder that keeps every registration for inspection.

use bridge_traits::package::{NativeModule, PackageBuilder, ViewManager};

/// Records registrations in order.
#[derive(Default)]
pub struct RecordingPackageBuilder {
    modules: Vec<Box<dyn NativeModule>>,
    view_managers: Vec<Box<dyn ViewManager>>,
}

impl RecordingPackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    pub fn view_manager_names(&self) -> Vec<&str> {
        self.view_managers.iter().map(|v| v.name()).collect()
    }

    /// Look up a registered module by name.
    pub fn module(&self, name: &str) -> Option<&dyn NativeModule> {
        self.modules
            .iter()
            .find(|m| m.name() == name)
            .map(|m| m.as_ref())
    }
}

impl PackageBuilder for RecordingPackageBuilder {
    fn add_native_module(&mut self, module: Box<dyn NativeModule>) {
        tracing::debug!(module = module.name(), "Registered native module");
        self.modules.push(module);
    }

    fn add_view_manager(&mut self, view_manager: Box<dyn ViewManager>) {
        tracing::debug!(view_manager = view_manager.name(), "Registered view manager");
        self.view_managers.push(view_manager);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl NativeModule for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    impl ViewManager for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut builder = RecordingPackageBuilder::new();
        builder.add_native_module(Box::new(Named("First")));
        builder.add_native_module(Box::new(Named("Second")));
        builder.add_view_manager(Box::new(Named("MapView")));

        assert_eq!(builder.module_names(), vec!["First", "Second"]);
        assert_eq!(builder.view_manager_names(), vec!["MapView"]);
        assert!(builder.module("Second").is_some());
        assert!(builder.module("Missing").is_none());
    }
}
