use clap::Parser;
use stack::{assemble, format_instructions, StackConfig};

#[derive(Parser, Debug)]
#[command(name = "deploy")]
#[command(about = "Assemble the stream relay infrastructure descriptor")]
struct Args {
    /// Stream group id (overrides STREAM_GROUP_ID)
    #[arg(long)]
    stream_group_id: Option<String>,

    /// Application id (overrides APPLICATION_ID)
    #[arg(long)]
    application_id: Option<String>,

    /// Also print usage instructions for an already-provisioned endpoint
    #[arg(long)]
    endpoint_base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = StackConfig::from_env();
    if let Some(id) = args.stream_group_id {
        config.stream_group_id = id;
    }
    if let Some(id) = args.application_id {
        config.application_id = id;
    }

    let stream_group_id = config.stream_group_id.clone();
    let application_id = config.application_id.clone();

    let descriptor = assemble(config)?;
    println!("{}", serde_json::to_string_pretty(&descriptor)?);

    if let Some(base_url) = args.endpoint_base_url {
        println!();
        println!(
            "{}",
            format_instructions(&base_url, &stream_group_id, &application_id)
        );
    }

    Ok(())
}
