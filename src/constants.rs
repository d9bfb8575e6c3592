// API constants
pub const CHAT_ENDPOINT: &str = "/api/chat/";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

// User-facing strings
pub const PENDING_TEXT: &str = "Fetching activity…";
pub const TRANSPORT_FAILURE_TEXT: &str = "Server error. Please try again.";
pub const GENERIC_FAILURE_TEXT: &str = "Something went wrong";

pub const WELCOME_TEXT: &str = "👋 Hi! I'm your Team Activity Tracker.\n\n\
You can ask things like:\n\
• What is John working on?\n\
• Show me Sarah's recent Jira activity\n\
• What has Mike committed this week?\n\n\
How can I help you today?";
