mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod library;
pub use library::Library;

mod books;
pub use books::Books;

mod book_detail;
pub use book_detail::BookDetail;

mod book_clubs;
pub use book_clubs::BookClubs;

mod book_club_detail;
pub use book_club_detail::BookClubDetail;
