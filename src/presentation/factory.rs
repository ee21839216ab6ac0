//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::GenerateUseCase;
use crate::infrastructure::{SystemCommandRunner, TempWorkspace};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<SystemCommandRunner, TempWorkspace>;

/// Create a generate use case that spawns real processes under the system temp dir
pub fn create_generate_use_case() -> ConcreteGenerateUseCase {
    GenerateUseCase::new(SystemCommandRunner::new(), TempWorkspace::new())
}
