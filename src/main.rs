//! CLI for jsonapi-rels - resolve JSON:API relationship linkage

use clap::{ArgGroup, Parser, ValueEnum};
use jsonapi_rels::{
    Document, Error, IdentifierRenderer, JsonRenderer, Renderer, ResolveOptions, Resolver,
    Resource, ResourceIdentifier, Result,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("operation").args(["path", "relationship", "all"])))]
struct Args {
    /// Input JSON:API document (`-` reads stdin)
    input: PathBuf,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Root resource as `type:id` (defaults to every primary data resource)
    #[arg(long, short)]
    resource: Option<ResourceIdentifier>,

    /// Relationship path to walk, e.g. `items.product`
    #[arg(long, short)]
    path: Option<String>,

    /// Single relationship to resolve
    #[arg(long)]
    relationship: Option<String>,

    /// Resolve every declared relationship
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Also look up stubs among primary data resources
    #[arg(long)]
    search_primary: bool,

    /// Separator between relationship names in --path
    #[arg(long, default_value_t = '.')]
    separator: char,

    /// Fail if any relationship stub points outside the document
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Ids,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(rendered) => {
            if let Some(output) = &args.output {
                if let Err(e) = std::fs::write(output, &rendered) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully wrote {:?}", output);
            } else {
                print!("{}", rendered);
            }
        }
        Err(e) => {
            eprintln!("Error resolving document: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let document = read_document(&args.input)?;
    let options = ResolveOptions {
        search_primary_data: args.search_primary,
        path_separator: args.separator,
    };
    let resolver = Resolver::new(&document, options);

    if args.strict {
        resolver.ensure_linkage_complete()?;
    }

    let roots = select_roots(&resolver, args.resource.as_ref())?;
    tracing::debug!(roots = roots.len(), "resolving from root resources");

    let renderer: Box<dyn Renderer> = match args.format {
        Format::Json => Box::new(JsonRenderer {
            pretty: args.pretty,
        }),
        Format::Ids => Box::new(IdentifierRenderer),
    };

    let mut out = String::new();
    for root in roots {
        let rendered = if let Some(path) = &args.path {
            renderer.render(&resolver.get_deep_relationship(root, path))?
        } else if let Some(name) = &args.relationship {
            renderer.render(&resolver.get_relationship(root, name))?
        } else if args.all {
            renderer.render_set(&resolver.get_relationships(root))?
        } else {
            renderer.render_resource(root)?
        };
        out.push_str(&rendered);
        if !rendered.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}

fn read_document(input: &Path) -> Result<Document> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Document::from_json(&text)
    } else {
        Document::from_path(input)
    }
}

fn select_roots<'a>(
    resolver: &Resolver<'a>,
    selector: Option<&ResourceIdentifier>,
) -> Result<Vec<&'a Resource>> {
    match selector {
        Some(stub) => resolver
            .locate(&stub.kind, &stub.id)
            .map(|resource| vec![resource])
            .ok_or_else(|| Error::ResourceNotFound {
                kind: stub.kind.clone(),
                id: stub.id.clone(),
            }),
        None => {
            let primary = resolver.document().primary_resources();
            if primary.is_empty() {
                return Err(Error::NoPrimaryData);
            }
            Ok(primary.iter().collect())
        }
    }
}
