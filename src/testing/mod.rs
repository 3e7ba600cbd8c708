mod recording_reporter;

pub use fake_installer::FakeInstaller;
pub use recording_reporter::RecordingReporter;
pub use scripted_prompt::ScriptedPrompt;
