pub mod npm_package_manager;
pub mod package_manager;

pub use npm_package_manager::NpmPackageManager;
pub use package_manager::MockPackageManager;
pub use package_manager::PackageManager;
pub use package_manager::PackageManagerRef;
