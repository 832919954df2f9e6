pub mod builder;
pub mod classic;
pub mod modern;
mod sections;

pub use builder::BuilderLayout;
pub use classic::ClassicLayout;
pub use modern::ModernLayout;
