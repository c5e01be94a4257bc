use crate::media::CaptureChoice;
use crate::templates::mobile_layout;
use maud::{html, Markup};

pub struct AttachVm<'a> {
    pub action: String,
    pub back_href: String,
    pub library_items: &'a [String],
    pub selection_limit: usize,
}

/// The "Add Attachment" prompt: camera, library (with its picker), cancel.
pub fn attach_page(vm: &AttachVm) -> Markup {
    let [camera, library, cancel] = CaptureChoice::OPTIONS;

    mobile_layout(
        "Add Attachment",
        Some(vm.back_href.as_str()),
        html! {
            form method="post" action=(vm.action) {
                p { "Choose attachment method" }

                div class="card" {
                    button type="submit" name="source" value=(camera.0) { (camera.1) }
                }

                div class="card" {
                    p class="label" { "Select up to " (vm.selection_limit) " items" }
                    @if vm.library_items.is_empty() {
                        p { "No media found in the library" }
                    }
                    @for item in vm.library_items {
                        div {
                            label {
                                input type="checkbox" name="item" value=(item);
                                " " (item)
                            }
                        }
                    }
                    button type="submit" name="source" value=(library.0) { (library.1) }
                }

                button type="submit" class="remove" name="source" value=(cancel.0) { (cancel.1) }
            }
        },
    )
}
