//! Packing & Moving Tips
//!
//! Static tip list; bodies are Markdown rendered with pulldown-cmark.

use pulldown_cmark::{html::push_html, Options, Parser};

use crate::models::Tip;

pub const TIPS: &[Tip] = &[
    Tip {
        title: "Choose the Right Box",
        body: "Use a variety of box sizes to suit different items. Pack **heavy items** like books \
               in small boxes and lighter items such as linens in larger boxes. Specialized kits \
               for dishes, glassware and wardrobe items keep fragile belongings safe.",
    },
    Tip {
        title: "Group Items and Pack by Room",
        body: "When packing, group similar items together and organize boxes by room (e.g. \
               kitchen, master bedroom). Prepare a separate *essentials box* for items you'll need \
               right away at your new home like toiletries, phone chargers and bedding.",
    },
    Tip {
        title: "Label Every Box",
        body: "Label boxes clearly with both a description of the contents and the room they're \
               destined for. Numbering each box and keeping a master inventory list helps track \
               your belongings. Mark boxes containing breakables as **FRAGILE**.",
    },
    Tip {
        title: "Seal Boxes Securely",
        body: "Tape the top and bottom seams of each box rather than just folding the flaps. \
               Choose a strong packing tape capable of holding the weight of your heaviest items.",
    },
    Tip {
        title: "Don't Overload Boxes",
        body: "Keep box weights under roughly 50 lbs to prevent injuries and avoid crushed contents. \
               Use proper lifting aids like gloves or a forearm forklift for heavier objects.",
    },
    Tip {
        title: "Disassemble Furniture Carefully",
        body: "Take apart furniture when possible and store the hardware (nuts, bolts, screws) in \
               labelled bags. Use moving blankets to protect pieces from scratches during transit.",
    },
    Tip {
        title: "Load Your Truck Strategically",
        body: "Place heavier boxes and furniture at the bottom and toward the front of the truck to \
               maintain stability. Stack lighter boxes on top. Load items you will need first *last* \
               so they're easily accessible at your destination.",
    },
    Tip {
        title: "Take a Video of Your Home Contents",
        body: "Before packing begins, record a quick video walkthrough of your home. This will help \
               you verify that everything arrives safely and can document damage for insurance claims \
               if needed.",
    },
    Tip {
        title: "Sort and Declutter",
        body: "Reduce moving costs by touching every item you own and deciding whether it should move \
               with you. Donate, sell or dispose of things you no longer need.",
    },
    Tip {
        title: "Gather Supplies Early",
        body: "If you're doing your own packing, gather boxes, bubble wrap, paper and markers well \
               ahead of moving day. Don't forget to schedule pickup or delivery of specialty boxes \
               and packing kits if required.",
    },
];

/// Render a tip body to HTML
pub fn render_body(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_count() {
        assert_eq!(TIPS.len(), 10);
        assert!(TIPS.iter().all(|t| !t.title.is_empty() && !t.body.is_empty()));
    }

    #[test]
    fn test_render_body_emphasis() {
        let html = render_body("Mark boxes as **FRAGILE**.");
        assert_eq!(html.trim(), "<p>Mark boxes as <strong>FRAGILE</strong>.</p>");
    }

    #[test]
    fn test_render_body_escapes_html() {
        let html = render_body("a < b");
        assert!(html.contains("a &lt; b"));
    }
}
