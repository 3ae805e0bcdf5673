//! Pages
//!
//! Top-level page components, one per shell the server renders.

pub mod dashboard;
pub mod home;

pub use dashboard::DashboardPage;
pub use home::HomePage;

#[cfg(test)]
mod tests {
    use super::dashboard::DashboardPageProps;
    use super::home::HomePageProps;
    use hackportal_core::{Announcement, DashboardProps, HomeProps};

    #[test]
    fn test_page_props_wrap_core_props() {
        let home: HomePageProps = HomePageProps::builder().props(HomeProps::default()).build();
        let dashboard: DashboardPageProps = DashboardPageProps::builder()
            .props(DashboardProps {
                announcements: vec![Announcement {
                    announcement: "Dinner".to_string(),
                    timestamp: None,
                }],
                spotlight: Vec::new(),
            })
            .build();

        // The page components own their own props types, distinct from the
        // shared records they carry
        assert_ne!(
            std::any::type_name_of_val(&home),
            std::any::type_name::<HomeProps>()
        );
        assert_ne!(
            std::any::type_name_of_val(&dashboard),
            std::any::type_name::<DashboardProps>()
        );
    }
}
