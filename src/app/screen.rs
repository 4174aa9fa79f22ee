use bon::Builder;
use chrono::{DateTime, Local};
use uuid::Uuid;

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct DemoScreen {
    #[builder(default = Uuid::new_v4())]
    pub id: Uuid,
    #[builder(into)]
    pub title: String,
    #[builder(default = Local::now())]
    pub created_at: DateTime<Local>,
}

impl DemoScreen {
    pub fn root() -> Self {
        DemoScreen::builder().title("Home").build()
    }

    pub fn numbered(number: usize) -> Self {
        DemoScreen::builder().title(format!("Screen {number}")).build()
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.created_at.format("%H:%M:%S"))
    }
}
