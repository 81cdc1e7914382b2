mod google_mock;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Basic functionality tests to ensure nothing is broken
// - google_mock: Mocking the Google Calendar event source for testing
// - agenda_pipeline: End-to-end ingest -> sort -> group -> render runs
