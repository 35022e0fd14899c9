use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use hellcard_core::{
    CharacterRecord, ClassTag, DecodeOptions, HpOrder, SaveFile, SaveFormat, TagPolicy,
};
use hellcard_render::{card_summary, render_json, render_text};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Sp,
    Mp,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HpOrderArg {
    MaxFirst,
    CurrentFirst,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    /// Save layout; not self-describing, depends on which directory the
    /// file came from.
    #[arg(long, value_enum)]
    format: FormatArg,
    #[arg(long = "hp-order", value_enum, default_value = "max-first")]
    hp_order: HpOrderArg,
    /// Fail on unrecognized class tags instead of dropping the record.
    #[arg(long = "strict-tags")]
    strict_tags: bool,
    #[arg(long)]
    names: bool,
    #[arg(long)]
    floors: bool,
    #[arg(long)]
    hp: bool,
    #[arg(long)]
    gold: bool,
    #[arg(long)]
    cards: bool,
    #[arg(long)]
    companions: bool,
    #[arg(long)]
    json: bool,
    #[arg(long = "set-mage-name", value_name = "NAME")]
    set_mage_name: Option<String>,
    #[arg(long = "set-warrior-name", value_name = "NAME")]
    set_warrior_name: Option<String>,
    #[arg(long = "set-rogue-name", value_name = "NAME")]
    set_rogue_name: Option<String>,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    names: bool,
    floors: bool,
    hp: bool,
    gold: bool,
    cards: bool,
    companions: bool,
}

impl FieldSelection {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            names: cli.names,
            floors: cli.floors,
            hp: cli.hp,
            gold: cli.gold,
            cards: cli.cards,
            companions: cli.companions,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.names || self.floors || self.hp || self.gold || self.cards || self.companions
    }

    fn selected_pairs(&self, save: &SaveFile) -> Vec<(String, String)> {
        let slots = [
            ("mage", &save.mage),
            ("warrior", &save.warrior),
            ("rogue", &save.rogue),
        ];

        let mut out = Vec::new();
        for (label, slot) in slots {
            let Some(record) = slot else {
                continue;
            };
            self.push_record_pairs(&mut out, label, record);
        }
        out
    }

    fn push_record_pairs(&self, out: &mut Vec<(String, String)>, label: &str, record: &CharacterRecord) {
        if self.names {
            out.push((format!("{label}.name"), record.name.clone()));
        }
        if self.floors {
            out.push((format!("{label}.floor"), record.floor.to_string()));
        }
        if self.hp {
            out.push((
                format!("{label}.hp"),
                format!("{}/{}", record.current_hp, record.max_hp),
            ));
        }
        if self.gold {
            out.push((format!("{label}.gold"), record.gold.to_string()));
        }
        if self.cards {
            out.push((format!("{label}.cards"), card_summary(&record.card_ids)));
        }
        if self.companions {
            out.push((
                format!("{label}.companions"),
                record.companions.len().to_string(),
            ));
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let fields = FieldSelection::from_cli(&cli);

    let renames: [(ClassTag, &Option<String>); 3] = [
        (ClassTag::Mage, &cli.set_mage_name),
        (ClassTag::Warrior, &cli.set_warrior_name),
        (ClassTag::Rogue, &cli.set_rogue_name),
    ];
    let has_edits = renames.iter().any(|(_, name)| name.is_some());

    if has_edits && cli.output.is_none() {
        eprintln!("--set-*-name flags require --output <PATH>");
        process::exit(2);
    }
    if !has_edits && cli.output.is_some() {
        eprintln!("--output requires at least one --set-*-name flag");
        process::exit(2);
    }

    let format = match cli.format {
        FormatArg::Sp => SaveFormat::SinglePlayer,
        FormatArg::Mp => SaveFormat::MultiPlayer,
    };
    let options = DecodeOptions {
        hp_order: match cli.hp_order {
            HpOrderArg::MaxFirst => HpOrder::MaxThenCurrent,
            HpOrderArg::CurrentFirst => HpOrder::CurrentThenMax,
        },
        tag_policy: if cli.strict_tags {
            TagPolicy::Fail
        } else {
            TagPolicy::DropRecord
        },
    };

    let mut bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    let mut save = SaveFile::decode(&bytes, format, options).unwrap_or_else(|e| {
        eprintln!("Error decoding save file: {}", cli.path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    // Each rename patches the buffer from the previous step; the slot's
    // physical position is re-read from a fresh decode every time.
    for (class, name) in renames {
        let Some(new_name) = name else {
            continue;
        };
        let position = position_of(&save, &class).unwrap_or_else(|| {
            eprintln!("No {} record in this save", class.as_str().to_lowercase());
            process::exit(1);
        });
        bytes = hellcard_core::rename(&bytes, format, position, new_name).unwrap_or_else(|e| {
            eprintln!("Error renaming {}: {e}", class.as_str().to_lowercase());
            process::exit(1);
        });
        save = SaveFile::decode(&bytes, format, options).unwrap_or_else(|e| {
            eprintln!("Error re-decoding patched save: {e}");
            process::exit(1);
        });
    }

    if has_edits {
        let out_path = cli.output.as_ref().expect("checked above");
        fs::write(out_path, &bytes).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
    }

    if cli.json {
        let rendered = serde_json::to_string_pretty(&render_json(&save)).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_field_mode() {
        for (key, value) in fields.selected_pairs(&save) {
            println!("{key}={value}");
        }
        return;
    }

    if let Some(out_path) = cli.output.as_ref() {
        println!("Wrote edited save to {}", out_path.display());
        return;
    }

    print!("{}", render_text(&save));
}

fn position_of(save: &SaveFile, class: &ClassTag) -> Option<u8> {
    let slot = match class {
        ClassTag::Mage => save.mage.as_ref(),
        ClassTag::Warrior => save.warrior.as_ref(),
        ClassTag::Rogue => save.rogue.as_ref(),
        ClassTag::Unrecognized(_) => None,
    };
    slot.map(|record| record.position)
}
