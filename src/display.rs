use crate::api::ObjectRecord;

/// Content for the image slot of the gallery. Replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtFrame {
    /// Absent when the record carries no public image.
    pub image_url: Option<String>,
    pub alt_text: String,
}

/// Content for the description panel: bold title line plus exactly five
/// entries in fixed order (About, Medium, Dimensions, Department, Credit).
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionCard {
    pub title_line: String,
    pub entries: [String; 5],
}

/// Project a record into the image slot.
pub fn art_frame(record: &ObjectRecord) -> ArtFrame {
    ArtFrame {
        image_url: present(&record.primary_image).map(str::to_string),
        alt_text: title_line(record),
    }
}

/// Project a record into the description panel.
pub fn description_card(record: &ObjectRecord) -> DescriptionCard {
    let about: Vec<&str> = [
        &record.artist_prefix,
        &record.artist_display_name,
        &record.period,
    ]
    .into_iter()
    .filter_map(present)
    .collect();
    let about = if about.is_empty() {
        "Unknown artist".to_string()
    } else {
        about.join(" ")
    };

    DescriptionCard {
        title_line: title_line(record),
        entries: [
            format!("About: {about}"),
            format!("Medium: {}", field_or_unrecorded(&record.medium)),
            format!("Dimensions: {}", field_or_unrecorded(&record.dimensions)),
            format!("Department: {}", field_or_unrecorded(&record.department)),
            format!("Credit: {}", field_or_unrecorded(&record.credit_line)),
        ],
    }
}

/// "Title (date)", dropping the parenthetical when the date is absent.
fn title_line(record: &ObjectRecord) -> String {
    let title = present(&record.title).unwrap_or("Untitled");
    match present(&record.object_date) {
        Some(date) => format!("{title} ({date})"),
        None => title.to_string(),
    }
}

/// Treat missing and blank strings alike.
fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn field_or_unrecorded(field: &Option<String>) -> &str {
    present(field).unwrap_or("(not recorded)")
}
