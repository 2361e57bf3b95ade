/// Renders the post-deploy usage text with a ready-to-open example URL.
/// Pure formatting: inputs were validated (or deliberately not) upstream,
/// and any string is embedded as-is.
pub fn format_instructions(
    base_url: &str,
    stream_group_id: &str,
    application_id: &str,
) -> String {
    let example_url =
        format!("{base_url}?userId=Player1&applicationId={application_id}&location=us-east-2");
    format!(
        "Stream relay deployed for stream group {stream_group_id}.\n\n\
         Open this URL in a browser to start a test session:\n\n  \
         {example_url}\n\n\
         Query parameters:\n  \
         userId         any name for the player requesting the session\n  \
         applicationId  the streaming application to launch (defaults to {application_id})\n  \
         location       the region to stream from, e.g. us-east-2\n\n\
         Change them to match your own players, applications and regions.\n"
    )
}
