mod zone;
