mod app;
mod help;
mod input;
use crate::app::{App, Plot, View};
use crate::input::read_input;
use anyhow::Context;
use calheat::{Orientation, Palette, PlotOptions, StyleConfig, ValueFormat};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::{layout::Rect, DefaultTerminal, TerminalOptions, Viewport};
use std::path::PathBuf;
use time::Month;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq)]
enum Command {
    Run(Box<RunArgs>),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq)]
struct RunArgs {
    infile: Option<PathBuf>,
    view: View,
    options: PlotOptions,
    style: StyleConfig,
    print: bool,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut infile = None;
        let mut month = None;
        let mut calendar = false;
        let mut ncols = 4;
        let mut options = PlotOptions::default();
        let mut style = StyleConfig::default();
        let mut print = false;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('m') | Arg::Long("month") => {
                    let value = parser.value()?.string()?;
                    let m = parse_month(&value).map_err(|error| lexopt::Error::ParsingFailed {
                        value: value.clone(),
                        error,
                    })?;
                    month = Some(m);
                }
                Arg::Short('c') | Arg::Long("calendar") => calendar = true,
                Arg::Long("ncols") => ncols = parser.value()?.parse()?,
                Arg::Short('H') | Arg::Long("horizontal") => {
                    options = options.orientation(Orientation::Horizontal);
                }
                Arg::Long("values") => options = options.value_label(true),
                Arg::Long("dates") => options = options.date_label(true),
                Arg::Long("outline") => options = options.month_grid(true),
                Arg::Long("colorbar") => options = options.colorbar(true),
                Arg::Long("frame") => options.frame = true,
                Arg::Long("value-format") => {
                    options = options.value_format(parser.value()?.parse::<ValueFormat>()?);
                }
                Arg::Long("colorbar-format") => {
                    options = options.colorbar_format(parser.value()?.parse::<ValueFormat>()?);
                }
                Arg::Long("cmap") => options = options.palette(parser.value()?.parse::<Palette>()?),
                Arg::Long("cmin") => options.cmin = Some(parser.value()?.parse()?),
                Arg::Long("cmax") => options.cmax = Some(parser.value()?.parse()?),
                Arg::Long("title") => options = options.title(parser.value()?.string()?),
                Arg::Short('s') | Arg::Long("style") => {
                    let value = parser.value()?.string()?;
                    let Some((name, val)) = value.split_once('=') else {
                        return Err(
                            format!("style option {value:?} is not of the form NAME=VALUE").into(),
                        );
                    };
                    style = style
                        .with_option(name, val)
                        .map_err(|e| lexopt::Error::ParsingFailed {
                            value: value.clone(),
                            error: Box::new(e),
                        })?;
                }
                Arg::Long("print") => print = true,
                Arg::Value(value) if infile.is_none() => infile = Some(PathBuf::from(value)),
                _ => return Err(arg.unexpected()),
            }
        }
        let view = match (month, calendar) {
            (Some(_), true) => {
                return Err("--month and --calendar are mutually exclusive".into());
            }
            (Some(m), false) => View::Month(m),
            (None, true) => View::Calendar { ncols },
            (None, false) => View::Strip,
        };
        Ok(Command::Run(Box::new(RunArgs {
            infile,
            view,
            options,
            style,
            print,
        })))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(args) => {
                let RunArgs {
                    infile,
                    view,
                    options,
                    style,
                    print,
                } = *args;
                let records = read_input(infile.as_deref())?;
                if print {
                    let plot = Plot::build(view, &records, &options)?;
                    print_plot(&plot, &style)
                } else {
                    let app = App::new(records, view, options, style)?;
                    with_terminal(|mut terminal| {
                        terminal.hide_cursor().context("failed to hide cursor")?;
                        app.run(terminal)?;
                        Ok(())
                    })
                }
            }
            Command::Help => {
                println!("Usage: calheat [OPTIONS] [FILE]");
                println!();
                println!("Draw a calendar-shaped heatmap of daily values");
                println!();
                println!("FILE (default: standard input) holds one `YYYY-MM-DD VALUE` record per");
                println!("line; the fields may be separated by a comma or whitespace.");
                println!();
                println!("Options:");
                println!("  -m, --month N         Show only month N (1-12) as a calendar block");
                println!("  -c, --calendar        Show one calendar block per month");
                println!("      --ncols N         Blocks per row with --calendar [default: 4]");
                println!("  -H, --horizontal      Run weeks across instead of down");
                println!("      --values          Write each day's value in its cell");
                println!("      --dates           Write each day's date in its cell");
                println!("      --value-format FMT");
                println!("                        Write values as `int` (no decimal places) or");
                println!("                        `decimal` (one place) [default: int]");
                println!("      --colorbar-format FMT");
                println!("                        Format of the colorbar's end values");
                println!("                        [default: the value format]");
                println!("      --outline         Outline each month");
                println!("      --colorbar        Show the color scale");
                println!("      --frame           Draw a border around the plot");
                println!("      --cmap NAME       Color palette (github, greens, july, sunset,");
                println!("                        golden; append _r to reverse)");
                println!("      --cmin X          Value at the bottom of the color scale");
                println!("      --cmax X          Value at the top of the color scale");
                println!("      --title TEXT      Title to show above the plot");
                println!("  -s, --style NAME=VALUE");
                println!("                        Set a style option (facecolor, edgecolor,");
                println!("                        textcolor, labelcolor, cellwidth, titlepad,");
                println!("                        xmargin, ymargin)");
                println!("      --print           Print the plot once instead of opening a view");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_month(value: &str) -> Result<Month, Box<dyn std::error::Error + Send + Sync>> {
    let n = value.parse::<u8>()?;
    Ok(Month::try_from(n)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

/// Draw `plot` once below the cursor and leave it in the scrollback
fn print_plot(plot: &Plot, style: &StyleConfig) -> anyhow::Result<()> {
    let (width, height) = plot.size(style);
    let mut terminal = ratatui::init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    });
    let r = terminal
        .draw(|frame| {
            let area = frame.area();
            let area = Rect {
                width: width.min(area.width),
                ..area
            };
            plot.render(style, area, frame.buffer_mut());
        })
        .map(|_| ())
        .context("failed to draw plot");
    ratatui::restore();
    println!();
    r
}
