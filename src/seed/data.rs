//! Fixed seed data: the catalog and the member roster

/// (title, author, ISBN)
pub const CATALOG: [(&str, &str, &str); 20] = [
    ("To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4"),
    ("1984", "George Orwell", "978-0-45-152493-5"),
    ("Pride and Prejudice", "Jane Austen", "978-0-14-143951-8"),
    ("The Great Gatsby", "F. Scott Fitzgerald", "978-0-74-327356-5"),
    ("One Hundred Years of Solitude", "Gabriel Garcia Marquez", "978-0-06-088328-7"),
    ("The Catcher in the Rye", "J.D. Salinger", "978-0-31-676948-0"),
    ("Brave New World", "Aldous Huxley", "978-0-06-085052-4"),
    ("The Lord of the Rings", "J.R.R. Tolkien", "978-0-54-400341-5"),
    ("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", "978-0-59-035342-7"),
    ("The Hobbit", "J.R.R. Tolkien", "978-0-54-792822-7"),
    ("Fahrenheit 451", "Ray Bradbury", "978-1-45-167331-9"),
    ("Jane Eyre", "Charlotte Bronte", "978-0-14-144114-6"),
    ("Wuthering Heights", "Emily Bronte", "978-0-14-143955-6"),
    ("The Odyssey", "Homer", "978-0-14-026886-7"),
    ("Crime and Punishment", "Fyodor Dostoevsky", "978-0-14-310763-5"),
    ("War and Peace", "Leo Tolstoy", "978-0-14-044793-4"),
    ("Anna Karenina", "Leo Tolstoy", "978-0-14-303500-8"),
    ("The Brothers Karamazov", "Fyodor Dostoevsky", "978-0-37-441122-3"),
    ("Moby-Dick", "Herman Melville", "978-0-14-243724-7"),
    ("Don Quixote", "Miguel de Cervantes", "978-0-06-093434-7"),
];

/// (name, email)
pub const ROSTER: [(&str, &str); 15] = [
    ("Emma Thompson", "emma.thompson@gmail.com"),
    ("James Wilson", "james.wilson@outlook.com"),
    ("Sofia Rodriguez", "sofia.rodriguez@yahoo.com"),
    ("Michael Chen", "michael.chen@gmail.com"),
    ("Olivia Johnson", "olivia.johnson@hotmail.com"),
    ("William Davis", "william.davis@gmail.com"),
    ("Isabella Martinez", "isabella.martinez@outlook.com"),
    ("Alexander Brown", "alex.brown@yahoo.com"),
    ("Mia Anderson", "mia.anderson@gmail.com"),
    ("Benjamin Taylor", "ben.taylor@hotmail.com"),
    ("Charlotte White", "charlotte.white@gmail.com"),
    ("Daniel Harris", "daniel.harris@outlook.com"),
    ("Amelia Clark", "amelia.clark@yahoo.com"),
    ("Henry Lewis", "henry.lewis@gmail.com"),
    ("Sophia Walker", "sophia.walker@hotmail.com"),
];
