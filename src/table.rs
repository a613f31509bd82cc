//! The Gram dashboard route table.
//!
//! Every relative top-level route lives under `/:orgSlug/:projectSlug`.
//! `login` is absolute and sits outside the project scope. `onboarding`
//! repeats the org and project segments below the ambient prefix, which
//! breaks it out of the normal page layout. `docs` points off-site.

use crate::route::{RouteDef, RouteTable};

/// Build the dashboard route table.
pub fn dashboard_routes() -> RouteTable {
    RouteTable::new()
        .route(
            "login",
            RouteDef::page("Login", "/login")
                .view("Login")
                .unauthenticated(),
        )
        .route(
            "onboarding",
            RouteDef::page("Onboarding", ":orgSlug/:projectSlug/onboarding")
                .view("OnboardingWizard"),
        )
        .route(
            "openapi",
            RouteDef::page("Your APIs", "")
                .icon("file-json-2")
                .view("OpenAPIDocuments"),
        )
        .route(
            "playground",
            RouteDef::page("Playground", "playground")
                .icon("message-circle")
                .view("Playground"),
        )
        .route(
            "integrations",
            RouteDef::page("Integrations", "integrations")
                .icon("package")
                .view("Integrations"),
        )
        .route(
            "customTools",
            RouteDef::page("Custom Tools", "custom-tools")
                .icon("pencil-ruler")
                .view("CustomToolsRoot")
                .index_view("CustomTools")
                .sub_page(
                    "toolBuilderNew",
                    RouteDef::page("Tool Builder", "new").view("ToolBuilderNew"),
                )
                .sub_page(
                    "toolBuilder",
                    RouteDef::page("Tool Builder", ":toolName").view("ToolBuilderPage"),
                ),
        )
        .route(
            "prompts",
            RouteDef::page("Prompts", "prompts")
                .icon("newspaper")
                .view("PromptsRoot")
                .index_view("Prompts")
                .sub_page(
                    "newPrompt",
                    RouteDef::page("New Prompt", "new").view("NewPromptPage"),
                )
                .sub_page(
                    "prompt",
                    RouteDef::page("Edit Prompt", ":promptName").view("PromptPage"),
                ),
        )
        .route(
            "toolsets",
            RouteDef::page("Toolsets", "toolsets")
                .icon("blocks")
                .view("ToolsetsRoot")
                .index_view("Toolsets")
                .sub_page(
                    "toolset",
                    RouteDef::page("Toolset", ":toolsetSlug")
                        .view("ToolsetRoot")
                        .index_view("ToolsetPage")
                        .sub_page("update", RouteDef::page("Update", "update").view("ToolSelect")),
                ),
        )
        .route(
            "mcp",
            RouteDef::page("MCP", "mcp")
                .icon("network")
                .view("MCPRoot")
                .index_view("MCPOverview")
                .sub_page(
                    "details",
                    RouteDef::page("MCP Details", ":toolsetSlug").view("MCPDetailPage"),
                ),
        )
        .route(
            "environments",
            RouteDef::page("Environments", "environments")
                .icon("globe")
                .view("EnvironmentsRoot")
                .index_view("Environments")
                .sub_page(
                    "environment",
                    RouteDef::page("Environment", ":environmentSlug").view("EnvironmentPage"),
                ),
        )
        .route(
            "agents",
            RouteDef::page("Agents", "agents").icon("code").view("SDK"),
        )
        .route(
            "slackApp",
            RouteDef::page("Slack App", "slack-app")
                .icon("slack")
                .view("SlackApp"),
        )
        .route(
            "uploadOpenAPI",
            RouteDef::page("Upload OpenAPI", "upload")
                .icon("upload")
                .view("Onboarding"),
        )
        .route(
            "settings",
            RouteDef::page("Settings", "settings")
                .icon("settings")
                .view("Settings"),
        )
        .route(
            "docs",
            RouteDef::external("Docs", "https://docs.getgram.ai").icon("book-open"),
        )
}
