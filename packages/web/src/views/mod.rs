mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod feed;
pub use feed::Feed;

mod search;
pub use search::Search;

mod dashboard;
pub use dashboard::Dashboard;

mod public_profile;
pub use public_profile::PublicProfile;

mod manage_teams;
pub use manage_teams::ManageTeams;

mod events;
pub use events::Events;
