//! Static catalog advertised by `GET /tools`.

use serde::Serialize;

/// Name and one-line description of an exposed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

impl ToolDescriptor {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Every operation the gateway exposes, in advertised order.
pub static TOOL_CATALOG: [ToolDescriptor; 10] = [
    ToolDescriptor::new("list_patterns", "List all available Fabric patterns"),
    ToolDescriptor::new("list_models", "List all available AI models"),
    ToolDescriptor::new("list_contexts", "List all available contexts"),
    ToolDescriptor::new("run_pattern", "Run a Fabric pattern on input text"),
    ToolDescriptor::new("summarize", "Summarize text"),
    ToolDescriptor::new("extract_wisdom", "Extract wisdom from text"),
    ToolDescriptor::new("analyze_claims", "Analyze claims in text"),
    ToolDescriptor::new("youtube_transcript", "Get YouTube video transcript"),
    ToolDescriptor::new("scrape_url", "Scrape webpage to markdown"),
    ToolDescriptor::new("chat", "Chat with AI model"),
];
