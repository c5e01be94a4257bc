use crate::domain::{Notice, Project};
use crate::routes::Route;
use crate::templates::{
    components::{detail_row, notice_box},
    format::{format_cad, format_date},
    mobile_layout,
};
use maud::{html, Markup};

pub fn project_detail_page(project: &Project, notice: Option<&Notice>) -> Markup {
    mobile_layout(
        "Project Details",
        Some(Route::project_list().href().as_str()),
        html! {
            @if let Some(n) = notice {
                (notice_box(n, false))
            }

            div class="card" {
                h2 { (project.name) }

                section {
                    h3 { "Project Information" }
                    (detail_row("Location", &project.location))
                    (detail_row("Status", project.status.label()))
                    (detail_row("Contract Amount", &format_cad(project.contract_amount)))
                    (detail_row("Tender Date", &format_date(project.tender_date)))
                }

                section {
                    h3 { "Contractor Details" }
                    (detail_row("Company Name", &project.contractor))
                    @if !project.contractor_email.is_empty() {
                        div class="row" {
                            span class="label" { "Email" }
                            a
                                href={ "mailto:" (project.contractor_email) }
                                aria-label={ "Contact contractor via email: " (project.contractor_email) }
                            { (project.contractor_email) }
                        }
                    }
                }

                @if let Some(description) = &project.description {
                    section {
                        h3 { "Description" }
                        p { (description) }
                    }
                }
            }

            form method="post" action=(Route::open_complaint(&project.id).href()) {
                button type="submit" class="submit" aria-label="Submit a complaint about this project" {
                    "Submit Complaint"
                }
            }
        },
    )
}
