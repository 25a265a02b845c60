use json::JsonValue;
use std::collections::HashSet;
use std::env;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One JSON catalog per makernote layout, found at `src/tags/<name>.json`.
const CATALOGS: &[&str] = &[
    "apple",
    "casio_type1",
    "casio_type2",
    "kodak",
    "kyocera",
    "leica",
    "leica_type5",
    "nikon_type1",
    "olympus_equipment",
    "olympus_focus_info",
    "olympus_image_processing",
    "olympus_raw_development",
    "olympus_raw_development2",
    "olympus_raw_info",
    "panasonic_raw_distortion",
    "panasonic_raw_wb_info",
    "panasonic_raw_wb_info2",
    "pentax",
    "reconyx_hyperfire",
    "reconyx_ultrafire",
    "ricoh",
    "samsung_type2",
    "sanyo",
    "sigma",
    "sony_type1",
    "sony_type6",
];

fn main() {
    let mut tag_code = String::new();
    for name in CATALOGS {
        tag_code += &parse_tag_file(&format!("src/tags/{name}.json"), name);
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let path = Path::new(&out_dir).join("makernote_tags.rs");
    let mut f = File::create(path).unwrap();
    f.write_all(tag_code.as_bytes()).unwrap();
}

struct TagEntry {
    name: String,
    tag: u16,
    display_name: String,
    description: Option<String>,
}

fn parse_tag_file(path: &str, name: &str) -> String {
    println!("cargo:rerun-if-changed={path}");
    let contents = fs::read_to_string(path).expect("Unable to read file");
    let mut json: JsonValue = json::parse(&contents).expect("Unable to parse JSON");
    let entries: Vec<_> = json
        .members_mut()
        .map(|entry| parse_tag_entry(entry.take()))
        .collect();
    check_unique(path, &entries);

    let definitions: String = entries.iter().map(tag_definition).collect();
    let arr_contents: String = entries.iter().fold(String::new(), |mut output, entry| {
        let _ = write!(
            output,
            "MakernoteTagDescriptor {{ name: {:?}, tag: {}, display_name: {:?} }}, ",
            entry.name, entry.name, entry.display_name
        );
        output
    });
    let len = entries.len();
    format!(
        "
        /// Tags contained in the {name} makernote
        #[allow(non_upper_case_globals)]
        pub mod {name} {{
            #[allow(unused_imports)]
            use super::MakernoteTagDescriptor;
            pub(crate) const ALL: [MakernoteTagDescriptor; {len}] = [{arr_contents}];
            {definitions}
        }}
    "
    )
}

fn parse_tag_entry(mut json: JsonValue) -> TagEntry {
    let name = json.remove("name").take_string().unwrap();
    let tag_string = json.remove("tag").take_string().unwrap();
    let tag = u16::from_str_radix(&tag_string[2..], 16)
        .unwrap_or_else(|_| panic!("tag '{tag_string}' of {name} is not a 0x prefixed u16"));
    let display_name = json.remove("display_name").take_string().unwrap();
    let description = json.remove("description").take_string();
    TagEntry {
        name,
        tag,
        display_name,
        description,
    }
}

fn tag_definition(entry: &TagEntry) -> String {
    let doc_description = entry
        .description
        .as_deref()
        .map(|description| format!("///\n{}", doc_lines(description)))
        .unwrap_or_default();
    format!(
        "
        /// {}
        {doc_description}
        pub const {}: u16 = {:#06X};\n
    ",
        entry.display_name, entry.name, entry.tag
    )
}

fn doc_lines(lines: &str) -> String {
    lines.lines().fold(String::new(), |mut out, s| {
        let _ = writeln!(out, "/// {s}");
        out
    })
}

// duplicate ids or names inside one catalog fail the build
fn check_unique(path: &str, entries: &[TagEntry]) {
    let mut tags = HashSet::new();
    let mut names = HashSet::new();
    for entry in entries {
        if !tags.insert(entry.tag) {
            panic!("{path}: duplicate tag id {:#06X}", entry.tag);
        }
        if !names.insert(entry.name.as_str()) {
            panic!("{path}: duplicate tag name {}", entry.name);
        }
    }
}
