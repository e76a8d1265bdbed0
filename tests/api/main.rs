mod newsletter;
mod pages;
