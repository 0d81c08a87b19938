//! Fixed editorial pages with no database content.

use super::layout;

pub fn plan() -> String {
    layout(
        "Plan a Trip",
        "/plan",
        "<section class=\"info\"><h1>Plan a Trip</h1>
<h2>When to go</h2>
<p>October to March is cool and dry across most of the country. The Himalayan
regions are best from April to June and in September, while the monsoon brings
the southwest coast to life from June to August.</p>
<h2>Getting around</h2>
<p>Long distances are easiest by overnight train or domestic flight. Hire a
local driver for day trips between nearby towns.</p>
<h2>Visas</h2>
<p>Most visitors need an e-Visa, applied for online before arrival.</p>
</section>",
    )
}

pub fn privacy() -> String {
    layout(
        "Privacy Policy",
        "",
        "<section class=\"info\"><h1>Privacy Policy</h1>
<p>This site does not ask for, store or share personal information. Your theme
preference is kept in your own browser's local storage and never sent to us.</p>
<p>Standard web server logs (address, time and requested page) are kept for
troubleshooting and deleted regularly.</p>
</section>",
    )
}

pub fn terms() -> String {
    layout(
        "Terms of Use",
        "",
        "<section class=\"info\"><h1>Terms of Use</h1>
<p>Content on this site is provided for general travel inspiration. Opening
hours, prices and entry rules change; confirm details with official sources
before you travel.</p>
<p>Photographs remain the property of their owners.</p>
</section>",
    )
}
