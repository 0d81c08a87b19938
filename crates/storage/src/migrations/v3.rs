//! Migration v3: lookup indexes

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_destination_category ON destination(category);
CREATE INDEX IF NOT EXISTS idx_destination_sub_category ON destination(sub_category);
CREATE INDEX IF NOT EXISTS idx_destination_title ON destination(title);
CREATE INDEX IF NOT EXISTS idx_carousel_sub_category ON carousel_image(sub_category);
";
