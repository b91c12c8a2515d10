/// Console adapters for user-facing terminal output
mod stderr_notifier;

pub use stderr_notifier::StderrNotifier;
