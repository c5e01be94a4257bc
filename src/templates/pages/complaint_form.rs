use crate::domain::{Attachment, ComplaintForm, FormField, Notice, ValidationResult};
use crate::templates::{
    components::{field_error, notice_box},
    mobile_layout,
};
use maud::{html, Markup};

pub struct ComplaintFormVm<'a> {
    pub action: String,
    pub back_href: String,
    pub project_name: Option<&'a str>,
    pub form: &'a ComplaintForm,
    pub errors: &'a ValidationResult,
    pub attachments: &'a [Attachment],
    pub notices: Vec<Notice>,
}

pub fn complaint_form_page(vm: &ComplaintFormVm) -> Markup {
    let invalid = |field: FormField| vm.errors.get(field).is_some();

    mobile_layout(
        "Submit Complaint",
        Some(vm.back_href.as_str()),
        html! {
            @for notice in &vm.notices {
                (notice_box(notice, true))
            }

            @if let Some(name) = vm.project_name {
                p class="label" { "Project: " strong { (name) } }
            }

            form method="post" action=(vm.action) {
                // First submit button in the form, so Enter in a text field submits.
                button type="submit" name="action" value="submit" class="default-action" tabindex="-1" aria-hidden="true" {}

                div class="card" {
                    label for="description" { strong { "Complaint Description *" } }
                    textarea
                        id="description"
                        name="description"
                        rows="6"
                        class=[invalid(FormField::Description).then_some("invalid")]
                        placeholder="Please provide detailed description of your complaint..."
                        aria-label="Complaint description"
                        aria-description="Enter detailed description of your complaint. This field is required."
                    { (vm.form.description) }
                    (field_error(vm.errors.get(FormField::Description)))
                }

                div class="card" {
                    label for="contact_email" { strong { "Contact Email (Optional)" } }
                    input
                        type="email"
                        id="contact_email"
                        name="contact_email"
                        value=(vm.form.contact_email)
                        class=[invalid(FormField::ContactEmail).then_some("invalid")]
                        placeholder="your.email@example.com"
                        autocapitalize="none"
                        aria-label="Contact email";
                    (field_error(vm.errors.get(FormField::ContactEmail)))
                }

                div class="card" {
                    strong { "Attachments" }
                    p class="label" {
                        "You can attach photos or videos (max 10MB each, JPEG, PNG, MP4, MOV)"
                    }
                    button type="submit" name="action" value="attach" aria-label="Add photo or video attachment" {
                        "+ Add Attachment"
                    }
                    @for (index, attachment) in vm.attachments.iter().enumerate() {
                        div class="row attachment" {
                            span { (attachment.file_name) }
                            button type="submit" class="remove" name="action" value={ "remove-" (index) } {
                                "Remove"
                            }
                        }
                    }
                }

                div class="card" {
                    label {
                        input type="checkbox" name="consent" value="true" checked[vm.form.consent_given];
                        " I consent to submitting personal media and understand it will be used for complaint processing *"
                    }
                    (field_error(vm.errors.get(FormField::ConsentGiven)))
                }

                button type="submit" class="submit" name="action" value="submit" aria-label="Submit complaint" {
                    "Submit Complaint"
                }
                p {
                    button type="submit" class="remove" name="action" value="back" { "Cancel" }
                }
            }
        },
    )
}
